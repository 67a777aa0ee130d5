use app_core::{RecognizerFrame, RecognizerHand};

/// Accumulates hands pushed from the JS recognizer callback until the next
/// animation frame consumes them.
///
/// MediaPipe runs on the video element's own cadence, which need not match
/// requestAnimationFrame; the newest complete result simply replaces any
/// unconsumed one, dropped frames are fine.
#[derive(Default)]
pub struct PendingFrame {
    building: RecognizerFrame,
    ready: Option<RecognizerFrame>,
}

impl PendingFrame {
    pub fn push_hand(&mut self, handedness: &str, category: &str, landmarks: &[f32]) {
        match RecognizerHand::from_flat(handedness, category, landmarks) {
            Ok(hand) => self.building.hands.push(hand),
            Err(e) => log::warn!("[bridge] dropped hand: {e}"),
        }
    }

    /// Seal the hands pushed since the last commit into a consumable result.
    /// An empty commit is meaningful: it reports "no hands this frame".
    pub fn commit(&mut self) {
        self.ready = Some(std::mem::take(&mut self.building));
    }

    /// Hand the newest committed result to the frame loop, if any.
    pub fn take(&mut self) -> Option<RecognizerFrame> {
        self.ready.take()
    }
}
