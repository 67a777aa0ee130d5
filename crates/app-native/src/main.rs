// Headless development harness: replays a scripted gesture session through
// the effect engine at a nominal 60 Hz and logs the resulting impulse and
// touch stream. No camera, no recognizer, no fluid sim required.

use app_core::{
    classify_hands, CanvasMetrics, EffectEngine, FluidSurface, FrameInput, RecognizerFrame,
    RecognizerHand, Splat, TouchPoint, LANDMARKS_PER_HAND,
};
use glam::{Vec2, Vec3};

const FPS: f64 = 60.0;

/// Surface that tallies what the engine emits and logs the touch lifecycle.
#[derive(Default)]
struct TallySurface {
    splats: usize,
    touch_starts: usize,
    touch_moves: usize,
    touch_ends: usize,
    force_sum: f32,
}

impl FluidSurface for TallySurface {
    fn splat(&mut self, splat: &Splat) {
        self.splats += 1;
        self.force_sum += splat.force.length();
    }

    fn touch_start(&mut self, points: &[TouchPoint]) {
        self.touch_starts += 1;
        log::info!("[harness] touch start {:?}", points[0].page);
    }

    fn touch_move(&mut self, _points: &[TouchPoint]) {
        self.touch_moves += 1;
    }

    fn touch_end(&mut self, points: &[TouchPoint]) {
        self.touch_ends += 1;
        log::info!("[harness] touch end {:?}", points[0].page);
    }
}

/// Synthesize a plausible 21-landmark hand around a palm center in video
/// space (x right, y down, both 0..1). Only the landmarks the engine reads
/// are placed with care; the rest pad out the schema.
fn synth_hand(handedness: &str, category: &str, center: Vec2, point_up: bool) -> RecognizerHand {
    let mut landmarks = vec![Vec3::new(center.x, center.y, 0.0); LANDMARKS_PER_HAND];
    landmarks[0] = Vec3::new(center.x, center.y + 0.05, 0.0); // wrist below palm
    landmarks[5] = Vec3::new(center.x - 0.03, center.y - 0.05, 0.0); // index mcp
    landmarks[17] = Vec3::new(center.x + 0.03, center.y - 0.05, 0.0); // pinky mcp
    landmarks[8] = if point_up {
        Vec3::new(center.x - 0.03, center.y - 0.13, 0.0) // index tip extended
    } else {
        Vec3::new(center.x - 0.03, center.y - 0.06, 0.0) // index tip curled
    };
    let mut flat = Vec::with_capacity(LANDMARKS_PER_HAND * 3);
    for lm in &landmarks {
        flat.extend_from_slice(&[lm.x, lm.y, lm.z]);
    }
    RecognizerHand::from_flat(handedness, category, &flat).expect("synthetic hand is well formed")
}

/// One scripted phase: a label for the log, a length in frames, and a
/// function from phase-local frame number to the recognizer's output.
struct Phase {
    label: &'static str,
    frames: u32,
    hands: fn(u32) -> RecognizerFrame,
}

fn script() -> Vec<Phase> {
    vec![
        Phase {
            label: "right palm drags across",
            frames: 90,
            hands: |f| RecognizerFrame {
                hands: vec![synth_hand(
                    "Right",
                    "Open_Palm",
                    Vec2::new(0.25 + f as f32 * 0.005, 0.5),
                    false,
                )],
            },
        },
        Phase {
            label: "both palms glow",
            frames: 60,
            hands: |_| RecognizerFrame {
                hands: vec![
                    synth_hand("Left", "Open_Palm", Vec2::new(0.75, 0.5), false),
                    synth_hand("Right", "Open_Palm", Vec2::new(0.25, 0.5), false),
                ],
            },
        },
        Phase {
            label: "two fists wiggle",
            frames: 60,
            hands: |_| RecognizerFrame {
                hands: vec![
                    synth_hand("Left", "Closed_Fist", Vec2::new(0.7, 0.45), false),
                    synth_hand("Right", "Closed_Fist", Vec2::new(0.3, 0.55), false),
                ],
            },
        },
        Phase {
            label: "one finger ray, then dual rays",
            frames: 90,
            hands: |f| {
                let mut hands = vec![synth_hand(
                    "Right",
                    "Pointing_Up",
                    Vec2::new(0.3, 0.6),
                    true,
                )];
                if f >= 45 {
                    hands.push(synth_hand("Left", "Pointing_Up", Vec2::new(0.7, 0.6), true));
                }
                RecognizerFrame { hands }
            },
        },
        Phase {
            label: "thumb-up throw",
            frames: 30,
            // 0.15 video-units per 60 Hz frame is 9 u/s, past the throw
            // threshold; the hand leaves frame after the sweep.
            hands: |f| {
                let x = 0.8 - f as f32 * 0.15;
                if x < 0.05 {
                    return RecognizerFrame::default();
                }
                RecognizerFrame {
                    hands: vec![synth_hand("Right", "Thumb_Up", Vec2::new(x, 0.4), false)],
                }
            },
        },
        Phase {
            label: "hands down, balls coast",
            frames: 120,
            hands: |_| RecognizerFrame::default(),
        },
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let metrics = CanvasMetrics::new(1280.0, 720.0, 1.0);
    let mut engine = EffectEngine::new(42);
    let mut surface = TallySurface::default();

    let mut frame = 0u32;
    for phase in script() {
        log::info!("[harness] phase: {}", phase.label);
        for f in 0..phase.frames {
            let raw = (phase.hands)(f);
            let input = FrameInput {
                time_sec: frame as f64 / FPS,
                metrics,
                // the script speaks selfie-view, like a real webcam
                hands: classify_hands(&raw, true),
            };
            engine.update(&input, &mut surface);
            frame += 1;
        }
        log::info!(
            "[harness] after {} frames: {} splats, {} balls live",
            frame,
            surface.splats,
            engine.ball_count()
        );
    }

    log::info!(
        "[harness] done: {} splats (mean force {:.1}), touches {}/{}/{}, {} balls live",
        surface.splats,
        surface.force_sum / surface.splats.max(1) as f32,
        surface.touch_starts,
        surface.touch_moves,
        surface.touch_ends,
        engine.ball_count()
    );
    Ok(())
}
