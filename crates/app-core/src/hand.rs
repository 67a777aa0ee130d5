use crate::constants::*;
use crate::splat::in_bounds;
use glam::{Vec2, Vec3};

// MediaPipe hand landmark indices. Only the ones the engine reads are named;
// the recognizer always delivers all 21.
pub const WRIST: usize = 0;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const PINKY_MCP: usize = 17;
pub const LANDMARKS_PER_HAND: usize = 21;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub const COUNT: usize = 2;

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    #[inline]
    pub fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    /// Parse the recognizer's handedness label. Anything else is dropped.
    pub fn from_handedness(label: &str) -> Option<Hand> {
        match label {
            "Left" => Some(Hand::Left),
            "Right" => Some(Hand::Right),
            _ => None,
        }
    }

    #[inline]
    pub fn touch_id(self) -> i32 {
        match self {
            Hand::Left => LEFT_TOUCH_ID,
            Hand::Right => RIGHT_TOUCH_ID,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hand::Left => "left",
            Hand::Right => "right",
        }
    }
}

/// Gesture category reported by the recognizer, reduced to the labels the
/// dispatcher acts on. Categories with no effect mapping become `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureLabel {
    None,
    Fist,
    OpenPalm,
    Pointing,
    ThumbUp,
    Other,
}

impl GestureLabel {
    pub fn from_category(category: &str) -> GestureLabel {
        match category {
            "Closed_Fist" => GestureLabel::Fist,
            "Open_Palm" => GestureLabel::OpenPalm,
            "Pointing_Up" => GestureLabel::Pointing,
            "Thumb_Up" => GestureLabel::ThumbUp,
            "None" | "" => GestureLabel::None,
            _ => GestureLabel::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GestureLabel::None => "none",
            GestureLabel::Fist => "fist",
            GestureLabel::OpenPalm => "open_palm",
            GestureLabel::Pointing => "pointing",
            GestureLabel::ThumbUp => "thumb_up",
            GestureLabel::Other => "other",
        }
    }
}

/// One hand for one frame: side, classified gesture, and the raw landmark
/// positions in recognizer video space (x right, y down, both 0..1).
/// Built fresh every frame by the classifier adapter, never retained.
#[derive(Clone, Debug)]
pub struct HandFrame {
    pub side: Hand,
    pub label: GestureLabel,
    pub landmarks: Vec<Vec3>,
}

impl HandFrame {
    /// Landmark position in normalized simulation space (y flipped to
    /// bottom-up). Returns `None` when the landmark is missing.
    pub fn landmark_norm(&self, index: usize) -> Option<Vec2> {
        let lm = self.landmarks.get(index)?;
        Some(Vec2::new(lm.x, 1.0 - lm.y))
    }

    /// Hand anchor: centroid of wrist and the two outer knuckles, in
    /// normalized space. Out-of-range anchors are dropped, not clamped.
    pub fn anchor(&self) -> Option<Vec2> {
        let w = self.landmark_norm(WRIST)?;
        let i = self.landmark_norm(INDEX_MCP)?;
        let p = self.landmark_norm(PINKY_MCP)?;
        let centroid = (w + i + p) / 3.0;
        in_bounds(centroid).then_some(centroid)
    }

    /// Fingertip and un-normalized pointing direction (knuckle to tip) in
    /// normalized space. An out-of-range fingertip is dropped like an
    /// out-of-range anchor. Direction may be zero length; callers must cope.
    pub fn index_ray(&self) -> Option<(Vec2, Vec2)> {
        let mcp = self.landmark_norm(INDEX_MCP)?;
        let tip = self.landmark_norm(INDEX_TIP)?;
        in_bounds(tip).then_some((tip, tip - mcp))
    }
}
