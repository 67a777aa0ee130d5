use crate::constants::*;
use glam::Vec2;
use smallvec::SmallVec;

/// One anchor observation, timestamped in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocitySample {
    pub pos: Vec2,
    pub t_ms: f64,
}

/// Bounded per-hand history of anchor positions used for throw detection.
/// Holds at most [`VELOCITY_HISTORY_MAX`] samples, oldest evicted first.
#[derive(Clone, Debug, Default)]
pub struct VelocityHistory {
    pub samples: SmallVec<[VelocitySample; VELOCITY_HISTORY_MAX]>,
}

impl VelocityHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pos: Vec2, t_ms: f64) {
        if self.samples.len() == VELOCITY_HISTORY_MAX {
            self.samples.remove(0);
        }
        self.samples.push(VelocitySample { pos, t_ms });
    }

    /// Average velocity over consecutive sample pairs, reported only when it
    /// is fast enough to count as a throw.
    ///
    /// Pairs with non-positive or stale (>= [`THROW_PAIR_MAX_DT_SEC`]) time
    /// deltas are excluded, so a hand re-entering the frame after a gap does
    /// not produce a huge spurious velocity.
    pub fn detect_throw(&self) -> Option<Vec2> {
        if self.samples.len() < THROW_MIN_SAMPLES {
            return None;
        }
        let mut sum = Vec2::ZERO;
        let mut pairs = 0u32;
        for w in self.samples.windows(2) {
            let dt = (w[1].t_ms - w[0].t_ms) / 1000.0;
            if dt <= 0.0 || dt >= THROW_PAIR_MAX_DT_SEC {
                continue;
            }
            sum += (w[1].pos - w[0].pos) / dt as f32;
            pairs += 1;
        }
        if pairs == 0 {
            return None;
        }
        let avg = sum / pairs as f32;
        (avg.length() > THROW_SPEED_THRESHOLD).then_some(avg)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
