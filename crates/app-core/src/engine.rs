use crate::ball::MagicBall;
use crate::constants::*;
use crate::effects;
use crate::hand::{GestureLabel, HandFrame};
use crate::mapper::CanvasMetrics;
use crate::splat::{Color, TouchPoint};
use crate::surface::FluidSurface;
use crate::velocity::VelocityHistory;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// Everything the engine needs for one frame: the monotonic frame clock,
/// the canvas geometry, and the classified hands (left slot 0, right slot 1).
#[derive(Clone, Debug)]
pub struct FrameInput {
    pub time_sec: f64,
    pub metrics: CanvasMetrics,
    pub hands: [Option<HandFrame>; 2],
}

/// Owns all mutable gesture-effect state: per-hand throw histories, the live
/// projectiles, the previous synthetic-touch snapshot, and the rng behind
/// cosmetic colors. Constructed fresh with a seed so a run replays exactly.
pub struct EffectEngine {
    pub histories: [VelocityHistory; 2],
    pub balls: Vec<MagicBall>,
    prev_touches: SmallVec<[TouchPoint; 2]>,
    rng: StdRng,
}

impl EffectEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            histories: [VelocityHistory::new(), VelocityHistory::new()],
            balls: Vec::new(),
            prev_touches: SmallVec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Drop all gesture state, for when the camera or recognizer stream
    /// restarts. The previous-touch snapshot is kept so a live synthetic
    /// touch ends on the next update instead of sticking in the fluid sim.
    pub fn reset(&mut self) {
        for h in &mut self.histories {
            h.clear();
        }
        self.balls.clear();
        log::info!("[engine] reset");
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn spawn_ball(&mut self, pos: Vec2, vel: Vec2) {
        if self.balls.len() >= MAX_BALLS {
            self.balls.remove(0);
            log::info!("[ball] cap reached, oldest evicted");
        }
        let color = Color::from_hsv(self.rng.gen::<f32>(), 0.8, 1.0);
        self.balls.push(MagicBall::new(pos, vel, color));
        log::info!(
            "[ball] spawn at ({:.2},{:.2}) vel=({:.2},{:.2}) live={}",
            pos.x,
            pos.y,
            vel.x,
            vel.y,
            self.balls.len()
        );
    }

    /// Run one frame: throw tracking, per-hand effects, touch synthesis, then
    /// ball physics. Each gesture category is evaluated independently per
    /// hand, so e.g. a left fist and a right pointing finger both fire.
    ///
    /// A throw detected here spawns its ball before the ball step, so the new
    /// ball advances (and trails) on the same frame.
    pub fn update<S: FluidSurface>(&mut self, input: &FrameInput, surface: &mut S) {
        let mut splats = Vec::new();

        for hand in input.hands.iter().flatten() {
            if hand.label != GestureLabel::ThumbUp {
                continue;
            }
            let anchor = match hand.anchor() {
                Some(a) => a,
                None => continue,
            };
            let i = hand.side.index();
            self.histories[i].record(anchor, input.time_sec * 1000.0);
            if let Some(vel) = self.histories[i].detect_throw() {
                log::info!(
                    "[throw] {} hand at {:.1} u/s",
                    hand.side.as_str(),
                    vel.length()
                );
                self.histories[i].clear();
                self.spawn_ball(anchor, vel);
            }
        }

        let pointing_both = input
            .hands
            .iter()
            .flatten()
            .filter(|h| h.label == GestureLabel::Pointing)
            .count()
            == 2;

        for hand in input.hands.iter().flatten() {
            match hand.label {
                GestureLabel::Fist => {
                    if let Some(anchor) = hand.anchor() {
                        effects::fist_wiggle(anchor, hand.side, input.time_sec, &mut splats);
                    }
                }
                GestureLabel::Pointing => {
                    if pointing_both {
                        if let Some(anchor) = hand.anchor() {
                            effects::dual_rays(
                                anchor,
                                hand.side,
                                input.time_sec,
                                &mut self.rng,
                                &mut splats,
                            );
                        }
                    } else if let Some((tip, dir)) = hand.index_ray() {
                        effects::finger_ray(tip, dir, input.time_sec, &mut self.rng, &mut splats);
                    }
                }
                _ => {}
            }
        }

        // Both palms glow and supersede touch synthesis; exactly one palm
        // drives the synthetic touch.
        let palms: SmallVec<[&HandFrame; 2]> = input
            .hands
            .iter()
            .flatten()
            .filter(|h| h.label == GestureLabel::OpenPalm)
            .collect();
        let mut touches: SmallVec<[TouchPoint; 2]> = SmallVec::new();
        if palms.len() == 2 {
            for hand in &palms {
                if let Some(anchor) = hand.anchor() {
                    effects::palm_glow(anchor, hand.side, &mut splats);
                }
            }
        } else if palms.len() == 1 {
            if let Some(anchor) = palms[0].anchor() {
                touches.push(TouchPoint {
                    id: palms[0].side.touch_id(),
                    page: input.metrics.to_page(anchor),
                });
            }
        }
        self.sync_touches(&touches, surface);

        for splat in &splats {
            surface.splat(splat);
        }

        // Ball physics runs every frame regardless of gesture state. A ball
        // that just expired emits no trail.
        self.balls.retain_mut(|ball| {
            if ball.step() {
                ball.trail(surface);
                true
            } else {
                false
            }
        });
    }

    /// Diff the synthetic touch list against the previous frame. More points
    /// than before begins a touch, fewer ends it (reporting the points that
    /// ended), same non-zero count moves it.
    fn sync_touches<S: FluidSurface>(&mut self, current: &[TouchPoint], surface: &mut S) {
        if current.len() > self.prev_touches.len() {
            log::info!("[touch] start id={}", current[0].id);
            surface.touch_start(current);
        } else if current.len() < self.prev_touches.len() {
            log::info!("[touch] end id={}", self.prev_touches[0].id);
            surface.touch_end(&self.prev_touches);
        } else if !current.is_empty() {
            surface.touch_move(current);
        }
        self.prev_touches = SmallVec::from_slice(current);
    }
}
