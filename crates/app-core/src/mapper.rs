use glam::Vec2;

/// Canvas geometry snapshot taken once per frame: backing-store pixel size
/// plus the device pixel ratio relating it to CSS page coordinates.
///
/// Three spaces meet here. The recognizer reports landmarks normalized to the
/// video frame (y down). Touch synthesis speaks page coordinates (CSS pixels,
/// y down). The simulation runs in normalized space over the canvas with y
/// flipped to bottom-up.
#[derive(Clone, Copy, Debug)]
pub struct CanvasMetrics {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl CanvasMetrics {
    /// Backing pixel size is clamped to at least 1x1 so the mappings stay
    /// finite while the canvas is collapsed during layout.
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            pixel_ratio,
        }
    }

    #[inline]
    pub fn css_width(&self) -> f32 {
        self.width / self.pixel_ratio
    }

    #[inline]
    pub fn css_height(&self) -> f32 {
        self.height / self.pixel_ratio
    }

    /// Page coordinates to normalized simulation space, flipping y so the
    /// bottom of the canvas is 0.
    pub fn to_normalized(&self, page: Vec2) -> Vec2 {
        Vec2::new(
            page.x * self.pixel_ratio / self.width,
            1.0 - page.y * self.pixel_ratio / self.height,
        )
    }

    /// Exact inverse of `to_normalized`.
    pub fn to_page(&self, norm: Vec2) -> Vec2 {
        Vec2::new(
            norm.x * self.width / self.pixel_ratio,
            (1.0 - norm.y) * self.height / self.pixel_ratio,
        )
    }

    /// Recognizer video coordinates (0..1, y down) to page coordinates.
    pub fn landmark_to_page(&self, lm: Vec2) -> Vec2 {
        Vec2::new(lm.x * self.css_width(), lm.y * self.css_height())
    }
}
