use glam::Vec2;

/// Linear RGB color attached to a force impulse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb3(rgb: [f32; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        }
    }

    /// Standard HSV to RGB conversion; hue wraps, s and v are expected in [0, 1].
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = (h.fract() + 1.0).fract() * 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as i32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self { r, g, b }
    }

    /// Uniformly scale all channels, used for life-based trail fading.
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }
}

/// One force impulse handed to the fluid surface. Position is in normalized
/// space, force in normalized units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splat {
    pub pos: Vec2,
    pub force: Vec2,
    pub color: Color,
}

/// Synthetic touch point in page coordinates. Ids are the negative per-hand
/// sentinels, never real touch identifiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub page: Vec2,
}

/// Splat coordinates outside the unit square are dropped, not clamped.
#[inline]
pub fn in_bounds(p: Vec2) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}
