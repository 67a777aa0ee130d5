use glam::Vec2;

// Shared tuning constants for throw detection, projectiles, and the splat
// generators. Both the web and native frontends read these.

// Velocity sampling / throw detection
pub const VELOCITY_HISTORY_MAX: usize = 5; // samples kept per hand, oldest evicted
pub const THROW_MIN_SAMPLES: usize = 3; // below this a throw is never reported
pub const THROW_PAIR_MAX_DT_SEC: f64 = 0.1; // pairs older than this are stale
pub const THROW_SPEED_THRESHOLD: f32 = 8.0; // normalized units per second

// Magic ball projectiles
pub const BALL_MAX_LIFE: u32 = 120; // ticks (~2s at the nominal rate)
pub const BALL_RADIUS: f32 = 0.03; // trail ring radius around the ball
pub const MAX_BALLS: usize = 10; // oldest ball evicted past this
pub const BALL_TICK_SEC: f32 = 1.0 / 60.0; // fixed step, independent of frame dt
pub const BALL_GRAVITY: f32 = 2.0; // normalized units per second squared
pub const BALL_RESTITUTION: f32 = 0.8; // horizontal bounce speed retention
pub const BALL_TRAIL_POINTS: usize = 3;
pub const BALL_TRAIL_FORCE_SCALE: f32 = 10.0; // trail force per unit of ball velocity

// Fist wiggle
pub const WIGGLE_POINTS: usize = 6;
pub const WIGGLE_RADIUS: f32 = 0.04; // ring radius around the anchor
pub const WIGGLE_WOBBLE: f32 = 0.3; // sinusoidal radius perturbation, fraction of radius
pub const WIGGLE_RATE: f32 = 6.0; // radians per second
pub const FIST_FORCE: f32 = 25.0;
pub const FIST_SATURATION: f32 = 0.35;
pub const FIST_VALUE: f32 = 0.9;
pub const FIST_HUE: [f32; 2] = [0.58, 0.07]; // cool left, warm right

// Finger ray (single pointing hand)
pub const RAY_POINTS: usize = 2;
pub const RAY_SPACING: f32 = 0.05; // step along the ray from the fingertip
pub const RAY_WAVE_AMP: f32 = 0.015; // perpendicular sinusoid amplitude
pub const RAY_WAVE_RATE: f32 = 9.0; // radians per second
pub const RAY_FORCE: f32 = 40.0;

// Dual rays (both hands pointing)
pub const DUAL_RAY_POINTS: usize = 3;
pub const DUAL_RAY_SPACING: f32 = 0.07;
pub const DUAL_RAY_FORCE: f32 = 50.0;

// Dual-palm glow
pub const GLOW_POINTS: usize = 2; // interpolated along anchor -> center
pub const GLOW_PULL_SCALE: f32 = 200.0; // continuous pull toward the center
pub const GLOW_COLOR: [[f32; 3]; 2] = [
    [0.45, 0.75, 1.0], // left, cool
    [1.0, 0.7, 0.35],  // right, warm
];

// Synthetic touch identifiers, negative to stay clear of real touch ids
pub const LEFT_TOUCH_ID: i32 = -10;
pub const RIGHT_TOUCH_ID: i32 = -11;

#[inline]
pub fn canvas_center() -> Vec2 {
    Vec2::new(0.5, 0.5)
}
