use crate::constants::*;
use crate::splat::{in_bounds, Color, Splat};
use crate::surface::FluidSurface;
use glam::Vec2;
use std::f32::consts::TAU;

/// Ballistic projectile spawned by a throw gesture. Lives for a fixed number
/// of ticks and drags a fading trail of force impulses behind it.
#[derive(Clone, Copy, Debug)]
pub struct MagicBall {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub life: u32,
}

impl MagicBall {
    pub fn new(pos: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel,
            color,
            life: BALL_MAX_LIFE,
        }
    }

    /// Advance one fixed tick: gravity, integration, horizontal bounce, life
    /// countdown. Returns whether the ball is still alive; a ball that just
    /// expired must not emit a trail this tick.
    ///
    /// Only the side walls bounce. The ball falls freely past the top and
    /// bottom edges and simply runs out its lifetime there.
    pub fn step(&mut self) -> bool {
        self.vel.y -= BALL_GRAVITY * BALL_TICK_SEC;
        self.pos += self.vel * BALL_TICK_SEC;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x * BALL_RESTITUTION;
        } else if self.pos.x > 1.0 {
            self.pos.x = 1.0;
            self.vel.x = -self.vel.x * BALL_RESTITUTION;
        }
        self.life -= 1;
        self.life > 0
    }

    /// Fraction of lifetime remaining, 1 at spawn down to 0 at expiry.
    #[inline]
    pub fn fade(&self) -> f32 {
        self.life as f32 / BALL_MAX_LIFE as f32
    }

    /// Emit the trail: evenly spaced impulses on a ring around the ball,
    /// force following the ball's velocity, color fading with remaining life.
    /// Ring points outside the unit square are skipped.
    pub fn trail<S: FluidSurface>(&self, surface: &mut S) {
        let force = self.vel * BALL_TRAIL_FORCE_SCALE;
        let color = self.color.scaled(self.fade());
        for k in 0..BALL_TRAIL_POINTS {
            let theta = k as f32 * TAU / BALL_TRAIL_POINTS as f32;
            let pos = self.pos + Vec2::new(theta.cos(), theta.sin()) * BALL_RADIUS;
            if !in_bounds(pos) {
                continue;
            }
            surface.splat(&Splat { pos, force, color });
        }
    }
}
