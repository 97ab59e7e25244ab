//! Colour type and interpolation.

use std::fmt;

use image::Rgb;

/// An RGB colour value. There is no alpha channel; wallpapers are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from wide integer channels, clamping each to `0..=255`.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Linearly interpolate between two colours.
    ///
    /// Each channel is `round(a * (1 - ratio) + b * ratio)`. `ratio` is not
    /// restricted to `0..=1`; out-of-range results are clamped.
    pub fn lerp(a: Self, b: Self, ratio: f64) -> Self {
        let mix = |from: u8, to: u8| -> i32 {
            (from as f64 * (1.0 - ratio) + to as f64 * ratio).round() as i32
        };
        Self::clamped(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    /// Add a signed offset to each channel, clamping the result.
    pub fn shifted(self, dr: i32, dg: i32, db: i32) -> Self {
        Self::clamped(
            self.r as i32 + dr,
            self.g as i32 + dg,
            self.b as i32 + db,
        )
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Colour> for Rgb<u8> {
    fn from(colour: Colour) -> Self {
        Rgb(colour.to_rgb())
    }
}

impl From<Rgb<u8>> for Colour {
    fn from(pixel: Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
