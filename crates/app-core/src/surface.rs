use crate::splat::{Splat, TouchPoint};

/// Capability seam to the external fluid simulation. Every method defaults to
/// a no-op so a backend only overrides what its fluid object supports; the
/// engine never fails because a capability is missing.
pub trait FluidSurface {
    /// Apply one force impulse.
    fn splat(&mut self, _splat: &Splat) {}

    /// Begin a synthetic touch with the given points.
    fn touch_start(&mut self, _points: &[TouchPoint]) {}

    /// Move the live synthetic touch.
    fn touch_move(&mut self, _points: &[TouchPoint]) {}

    /// End a synthetic touch; `points` are the points that just ended.
    fn touch_end(&mut self, _points: &[TouchPoint]) {}
}

/// Surface that swallows everything. Useful when no fluid sim is attached.
pub struct NullSurface;

impl FluidSurface for NullSurface {}

/// Surface that records everything it receives, in call order per channel.
/// The integration tests and the headless harness inspect these.
#[derive(Debug, Default)]
pub struct MemorySurface {
    pub splats: Vec<Splat>,
    pub touch_starts: Vec<Vec<TouchPoint>>,
    pub touch_moves: Vec<Vec<TouchPoint>>,
    pub touch_ends: Vec<Vec<TouchPoint>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.splats.clear();
        self.touch_starts.clear();
        self.touch_moves.clear();
        self.touch_ends.clear();
    }
}

impl FluidSurface for MemorySurface {
    fn splat(&mut self, splat: &Splat) {
        self.splats.push(*splat);
    }

    fn touch_start(&mut self, points: &[TouchPoint]) {
        self.touch_starts.push(points.to_vec());
    }

    fn touch_move(&mut self, points: &[TouchPoint]) {
        self.touch_moves.push(points.to_vec());
    }

    fn touch_end(&mut self, points: &[TouchPoint]) {
        self.touch_ends.push(points.to_vec());
    }
}
