// Host-side integration tests for magic ball physics and trail emission.

use app_core::*;
use glam::Vec2;

fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> MagicBall {
    MagicBall::new(Vec2::new(x, y), Vec2::new(vx, vy), Color::new(1.0, 0.5, 0.25))
}

#[test]
fn new_ball_starts_at_full_life() {
    let ball = ball_at(0.5, 0.5, 0.0, 0.0);
    assert_eq!(ball.life, BALL_MAX_LIFE);
    assert!((ball.fade() - 1.0).abs() < 1e-6);
}

#[test]
fn life_counts_down_and_ball_dies_exactly_at_zero() {
    let mut ball = ball_at(0.5, 0.9, 0.0, 0.0);
    for step in 0..BALL_MAX_LIFE - 1 {
        assert!(ball.step(), "ball died early at step {step}");
    }
    assert!(!ball.step(), "ball must die on the final step");
    assert_eq!(ball.life, 0);
}

#[test]
fn gravity_accelerates_downward() {
    let mut ball = ball_at(0.5, 0.5, 0.0, 0.0);
    ball.step();
    assert!(
        (ball.vel.y + BALL_GRAVITY * BALL_TICK_SEC).abs() < 1e-6,
        "one tick of gravity expected, got vy={}",
        ball.vel.y
    );
    assert!(ball.pos.y < 0.5, "ball should have started falling");
}

#[test]
fn integration_uses_post_gravity_velocity() {
    let mut ball = ball_at(0.5, 0.5, 0.0, 0.0);
    ball.step();
    let expected_dy = -BALL_GRAVITY * BALL_TICK_SEC * BALL_TICK_SEC;
    assert!((ball.pos.y - (0.5 + expected_dy)).abs() < 1e-6);
}

#[test]
fn left_wall_bounce_clamps_and_reflects() {
    let mut ball = ball_at(0.005, 0.5, -1.0, 0.0);
    ball.step();
    assert_eq!(ball.pos.x, 0.0, "x must clamp to the wall");
    assert!(
        (ball.vel.x - BALL_RESTITUTION).abs() < 1e-6,
        "vx should flip and scale, got {}",
        ball.vel.x
    );
}

#[test]
fn right_wall_bounce_clamps_and_reflects() {
    let mut ball = ball_at(0.995, 0.5, 1.0, 0.0);
    ball.step();
    assert_eq!(ball.pos.x, 1.0);
    assert!((ball.vel.x + BALL_RESTITUTION).abs() < 1e-6);
}

#[test]
fn no_vertical_bounce_below_the_floor() {
    let mut ball = ball_at(0.5, 0.001, 0.0, -1.0);
    for _ in 0..3 {
        assert!(ball.step(), "falling out the bottom must not kill the ball");
    }
    assert!(ball.pos.y < 0.0, "ball should pass the floor freely");
}

#[test]
fn trail_rings_the_ball_with_velocity_driven_force() {
    let ball = ball_at(0.5, 0.5, 1.0, 0.0);
    let mut surface = MemorySurface::new();
    ball.trail(&mut surface);
    assert_eq!(surface.splats.len(), BALL_TRAIL_POINTS);
    for splat in &surface.splats {
        let dist = (splat.pos - ball.pos).length();
        assert!(
            (dist - BALL_RADIUS).abs() < 1e-6,
            "trail point off the ring at distance {dist}"
        );
        assert!((splat.force.x - BALL_TRAIL_FORCE_SCALE).abs() < 1e-4);
        assert!(splat.force.y.abs() < 1e-4);
        // Full life means no fading yet
        assert!((splat.color.r - 1.0).abs() < 1e-6);
    }
}

#[test]
fn trail_color_fades_with_remaining_life() {
    let mut ball = ball_at(0.5, 0.5, 0.0, 0.0);
    ball.life = BALL_MAX_LIFE / 2;
    let mut surface = MemorySurface::new();
    ball.trail(&mut surface);
    for splat in &surface.splats {
        assert!((splat.color.r - 0.5).abs() < 1e-6);
        assert!((splat.color.g - 0.25).abs() < 1e-6);
        assert!((splat.color.b - 0.125).abs() < 1e-6);
    }
}

#[test]
fn trail_skips_points_outside_the_unit_square() {
    // Hugging the left wall: the two ring points behind the ball fall outside
    let ball = ball_at(0.0, 0.5, 0.0, 0.0);
    let mut surface = MemorySurface::new();
    ball.trail(&mut surface);
    assert_eq!(surface.splats.len(), 1, "only the forward point survives");
    assert!(surface.splats[0].pos.x > 0.0);
}
