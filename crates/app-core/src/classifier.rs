use crate::hand::{GestureLabel, Hand, HandFrame, LANDMARKS_PER_HAND};
use glam::Vec3;
use thiserror::Error;

/// Floats per hand in the flat landmark layout the recognizer bridge uses
/// (x, y, z per landmark).
pub const LANDMARK_FLOATS: usize = LANDMARKS_PER_HAND * 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("landmark buffer holds {got} floats, expected {expected}")]
    LandmarkCount { got: usize, expected: usize },
}

/// One hand exactly as the recognizer reported it: label strings plus the
/// landmark positions in video space.
#[derive(Clone, Debug)]
pub struct RecognizerHand {
    pub handedness: String,
    pub category: String,
    pub landmarks: Vec<Vec3>,
}

impl RecognizerHand {
    /// Parse one hand from the flat `[x0, y0, z0, x1, y1, z1, ...]` layout
    /// the JS bridge delivers. The slice must hold exactly 21 landmarks.
    pub fn from_flat(
        handedness: impl Into<String>,
        category: impl Into<String>,
        flat: &[f32],
    ) -> Result<Self, BridgeError> {
        if flat.len() != LANDMARK_FLOATS {
            return Err(BridgeError::LandmarkCount {
                got: flat.len(),
                expected: LANDMARK_FLOATS,
            });
        }
        let landmarks = flat
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            handedness: handedness.into(),
            category: category.into(),
            landmarks,
        })
    }
}

/// Everything the recognizer produced for one video frame.
#[derive(Clone, Debug, Default)]
pub struct RecognizerFrame {
    pub hands: Vec<RecognizerHand>,
}

/// Route raw recognizer hands into per-side slots, left at index 0.
///
/// A missing hand is `None` for its side, never an error. When two raw hands
/// claim the same side the first wins. With `mirror` set (selfie view) the
/// reported handedness is swapped and landmark x flipped, since the
/// recognizer saw the unmirrored frame.
pub fn classify_hands(frame: &RecognizerFrame, mirror: bool) -> [Option<HandFrame>; 2] {
    let mut slots: [Option<HandFrame>; 2] = [None, None];
    for raw in &frame.hands {
        let reported = match Hand::from_handedness(&raw.handedness) {
            Some(h) => h,
            None => continue,
        };
        let side = if mirror { reported.opposite() } else { reported };
        if slots[side.index()].is_some() {
            continue;
        }
        let mut landmarks = raw.landmarks.clone();
        if mirror {
            for lm in &mut landmarks {
                lm.x = 1.0 - lm.x;
            }
        }
        slots[side.index()] = Some(HandFrame {
            side,
            label: GestureLabel::from_category(&raw.category),
            landmarks,
        });
    }
    slots
}
