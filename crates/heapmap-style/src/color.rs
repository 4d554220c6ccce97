#![forbid(unsafe_code)]

use std::fmt;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const POWDER_BLUE: Self = Self::new(176, 224, 230);
    pub const SKY_BLUE: Self = Self::new(135, 206, 235);
    pub const CORNFLOWER_BLUE: Self = Self::new(100, 149, 237);
    pub const ORANGE: Self = Self::new(255, 165, 0);
    pub const PINK: Self = Self::new(255, 192, 203);
    pub const GRAY: Self = Self::new(128, 128, 128);
    pub const LIGHT_GRAY: Self = Self::new(211, 211, 211);
    pub const RED: Self = Self::new(255, 0, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Interpolate between two colors, `t` clamped to `[0.0, 1.0]`.
pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
    Rgb::new(channel(a.r, b.r), channel(a.g, b.g), channel(a.b, b.b))
}
