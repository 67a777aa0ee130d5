// Host-side tests for the procedural splat generators.

use app_core::effects::{dual_rays, finger_ray, fist_wiggle, palm_glow};
use app_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn fist_wiggle_rings_the_anchor_with_inward_force() {
    let anchor = Vec2::new(0.5, 0.5);
    let mut out = Vec::new();
    fist_wiggle(anchor, Hand::Left, 0.25, &mut out);
    assert_eq!(out.len(), WIGGLE_POINTS);
    for splat in &out {
        let offset = splat.pos - anchor;
        let radius = offset.length();
        assert!(
            radius >= WIGGLE_RADIUS * (1.0 - WIGGLE_WOBBLE) - 1e-5
                && radius <= WIGGLE_RADIUS * (1.0 + WIGGLE_WOBBLE) + 1e-5,
            "ring radius {radius} outside the wobble band"
        );
        assert!(
            splat.force.dot(offset) < 0.0,
            "force must point back toward the anchor"
        );
        assert!((splat.force.length() - FIST_FORCE).abs() < 1e-3);
    }
}

#[test]
fn fist_wiggle_sides_get_distinct_colors() {
    let anchor = Vec2::new(0.5, 0.5);
    let (mut left, mut right) = (Vec::new(), Vec::new());
    fist_wiggle(anchor, Hand::Left, 0.0, &mut left);
    fist_wiggle(anchor, Hand::Right, 0.0, &mut right);
    assert_ne!(left[0].color, right[0].color);
    // all points of one hand share the hand's tint
    assert!(left.iter().all(|s| s.color == left[0].color));
}

#[test]
fn fist_wiggle_near_the_edge_drops_outside_points() {
    let mut out = Vec::new();
    fist_wiggle(Vec2::new(0.01, 0.5), Hand::Left, 0.0, &mut out);
    assert!(out.len() < WIGGLE_POINTS, "some ring points fall off canvas");
    assert!(out.iter().all(|s| (0.0..=1.0).contains(&s.pos.x)));
}

#[test]
fn finger_ray_steps_along_the_pointing_direction() {
    let tip = Vec2::new(0.5, 0.5);
    let mut out = Vec::new();
    finger_ray(tip, Vec2::new(0.0, 0.08), 0.0, &mut rng(), &mut out);
    assert_eq!(out.len(), RAY_POINTS);
    for (k, splat) in out.iter().enumerate() {
        let along = RAY_SPACING * (k + 1) as f32;
        assert!(
            (splat.pos.y - (0.5 + along)).abs() < 1e-5,
            "point {k} not spaced along the ray"
        );
        assert!(
            (splat.pos.x - 0.5).abs() <= RAY_WAVE_AMP + 1e-6,
            "sideways jiggle exceeds its amplitude"
        );
        // direction is normalized before scaling, so magnitude is fixed
        assert!((splat.force.length() - RAY_FORCE).abs() < 1e-3);
        assert!(splat.force.y > 0.0);
    }
}

#[test]
fn finger_ray_zero_direction_emits_nothing() {
    let mut out = Vec::new();
    finger_ray(Vec2::new(0.5, 0.5), Vec2::ZERO, 0.0, &mut rng(), &mut out);
    assert!(out.is_empty(), "tip on knuckle must be a silent no-op");
}

#[test]
fn finger_ray_color_is_bright_and_seed_deterministic() {
    let (mut a, mut b) = (Vec::new(), Vec::new());
    finger_ray(Vec2::new(0.5, 0.5), Vec2::X, 0.0, &mut rng(), &mut a);
    finger_ray(Vec2::new(0.5, 0.5), Vec2::X, 0.0, &mut rng(), &mut b);
    assert_eq!(a, b, "same seed must replay the same colors");
    for splat in &a {
        let max = splat.color.r.max(splat.color.g).max(splat.color.b);
        assert!((max - 0.8).abs() < 1e-5, "HSV value fixes the peak channel");
    }
}

#[test]
fn dual_rays_aim_at_the_canvas_center() {
    let anchor = Vec2::new(0.2, 0.5);
    let mut out = Vec::new();
    dual_rays(anchor, Hand::Left, 0.0, &mut rng(), &mut out);
    assert_eq!(out.len(), DUAL_RAY_POINTS);
    for splat in &out {
        assert!(splat.pos.x > anchor.x, "points march toward the center");
        assert!(splat.force.x > 0.0);
        assert!((splat.force.length() - DUAL_RAY_FORCE).abs() < 1e-3);
    }
}

#[test]
fn dual_rays_hands_run_in_antiphase() {
    let mut left = Vec::new();
    let mut right = Vec::new();
    // same anchor: only the per-side phase differs
    dual_rays(Vec2::new(0.2, 0.5), Hand::Left, 0.1, &mut rng(), &mut left);
    dual_rays(Vec2::new(0.2, 0.5), Hand::Right, 0.1, &mut rng(), &mut right);
    let left_off = left[0].pos.y - 0.5;
    let right_off = right[0].pos.y - 0.5;
    assert!(left_off.abs() > 1e-4, "t=0.1 sits off the sine's zero");
    assert!(
        (left_off + right_off).abs() < 1e-5,
        "a pi phase shift mirrors the sideways offset"
    );
}

#[test]
fn dual_rays_from_the_center_emit_nothing() {
    let mut out = Vec::new();
    dual_rays(canvas_center(), Hand::Left, 0.0, &mut rng(), &mut out);
    assert!(out.is_empty(), "zero-length direction is a silent no-op");
}

#[test]
fn palm_glow_pulls_along_the_center_segment() {
    let anchor = Vec2::new(0.1, 0.5);
    let mut out = Vec::new();
    palm_glow(anchor, Hand::Left, &mut out);
    assert_eq!(out.len(), GLOW_POINTS);
    let center = canvas_center();
    let mut last_force = f32::MAX;
    for splat in &out {
        assert!((splat.pos.y - 0.5).abs() < 1e-6, "points lie on the segment");
        assert!(splat.pos.x > anchor.x && splat.pos.x < center.x);
        assert!(splat.force.x > 0.0, "pull is toward the center");
        let expected = (center - splat.pos).length() * GLOW_PULL_SCALE;
        assert!((splat.force.length() - expected).abs() < 1e-2);
        assert!(splat.force.length() < last_force, "pull fades nearer the center");
        last_force = splat.force.length();
    }
    assert_eq!(out[0].color, Color::from_rgb3(GLOW_COLOR[0]));
}

#[test]
fn palm_glow_colors_split_warm_and_cool_by_side() {
    let (mut left, mut right) = (Vec::new(), Vec::new());
    palm_glow(Vec2::new(0.2, 0.5), Hand::Left, &mut left);
    palm_glow(Vec2::new(0.8, 0.5), Hand::Right, &mut right);
    assert!(left[0].color.b > left[0].color.r, "left leans cool");
    assert!(right[0].color.r > right[0].color.b, "right leans warm");
}
