use crate::constants::*;
use crate::hand::Hand;
use crate::splat::{in_bounds, Color, Splat};
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

// Pure generators: hand geometry in, splats out. All cosmetic motion is
// driven by the injected frame time and all random color by the caller's
// rng, so a fixed seed replays identically.

/// Ring of inward impulses around a fist, radius wobbling over time.
/// Color is a fixed low-saturation tint per side.
pub fn fist_wiggle(anchor: Vec2, side: Hand, time_sec: f64, out: &mut Vec<Splat>) {
    let color = Color::from_hsv(FIST_HUE[side.index()], FIST_SATURATION, FIST_VALUE);
    let t = time_sec as f32;
    for k in 0..WIGGLE_POINTS {
        let theta = k as f32 * TAU / WIGGLE_POINTS as f32;
        let wobble = (t * WIGGLE_RATE + theta * 3.0).sin();
        let radius = WIGGLE_RADIUS * (1.0 + WIGGLE_WOBBLE * wobble);
        let pos = anchor + Vec2::new(theta.cos(), theta.sin()) * radius;
        if !in_bounds(pos) {
            continue;
        }
        let force = (anchor - pos).normalize_or_zero() * FIST_FORCE;
        out.push(Splat { pos, force, color });
    }
}

/// Impulses stepped along the index-finger ray from the fingertip, each
/// displaced sideways by a travelling wave. A zero-length direction (tip on
/// knuckle) emits nothing.
pub fn finger_ray(tip: Vec2, dir: Vec2, time_sec: f64, rng: &mut StdRng, out: &mut Vec<Splat>) {
    let dir = match dir.try_normalize() {
        Some(d) => d,
        None => return,
    };
    let perp = dir.perp();
    let t = time_sec as f32;
    for k in 0..RAY_POINTS {
        let along = RAY_SPACING * (k + 1) as f32;
        let wave = (t * RAY_WAVE_RATE + k as f32 * 2.1).sin() * RAY_WAVE_AMP;
        let pos = tip + dir * along + perp * wave;
        if !in_bounds(pos) {
            continue;
        }
        out.push(Splat {
            pos,
            force: dir * RAY_FORCE,
            color: Color::from_hsv(rng.gen::<f32>(), 0.9, 0.8),
        });
    }
}

/// Beam from one hand toward the canvas center, fired when both hands point.
/// The sideways wave runs in antiphase between the two hands so the beams
/// interleave instead of overlapping.
pub fn dual_rays(anchor: Vec2, side: Hand, time_sec: f64, rng: &mut StdRng, out: &mut Vec<Splat>) {
    let dir = match (canvas_center() - anchor).try_normalize() {
        Some(d) => d,
        None => return,
    };
    let perp = dir.perp();
    let phase = if side == Hand::Right { PI } else { 0.0 };
    let t = time_sec as f32;
    for k in 0..DUAL_RAY_POINTS {
        let along = DUAL_RAY_SPACING * (k + 1) as f32;
        let wave = (t * RAY_WAVE_RATE + phase + k as f32 * 1.3).sin() * RAY_WAVE_AMP;
        let pos = anchor + dir * along + perp * wave;
        if !in_bounds(pos) {
            continue;
        }
        out.push(Splat {
            pos,
            force: dir * DUAL_RAY_FORCE,
            color: Color::from_hsv(rng.gen::<f32>(), 0.8, 1.0),
        });
    }
}

/// Continuous pull toward the canvas center while both palms are open:
/// impulses interpolated along the anchor-to-center segment, force growing
/// with distance from the center. Interpolated points cannot leave the unit
/// square, so no bounds check is needed.
pub fn palm_glow(anchor: Vec2, side: Hand, out: &mut Vec<Splat>) {
    let center = canvas_center();
    let color = Color::from_rgb3(GLOW_COLOR[side.index()]);
    for k in 0..GLOW_POINTS {
        let t = (k + 1) as f32 / (GLOW_POINTS + 1) as f32;
        let pos = anchor.lerp(center, t);
        let force = (center - pos) * GLOW_PULL_SCALE;
        out.push(Splat { pos, force, color });
    }
}
