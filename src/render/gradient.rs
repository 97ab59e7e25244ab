//! Background synthesis: a three-anchor horizontal gradient with grain.
//!
//! The gradient runs left -> mid over the left half of the image and
//! mid -> right over the right half. Every channel of every pixel gets a
//! small independent random offset, and the whole image is blurred afterwards to turn the
//! grain into a soft texture.

use rand::Rng;

use crate::error::Result;
use crate::types::Colour;

use super::canvas::Canvas;

/// Produces gradient backgrounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSynthesizer {
    /// Colour at the left edge (dark grey).
    pub left: Colour,

    /// Colour at the horizontal centre (dark blue-grey).
    pub mid: Colour,

    /// Colour at the right edge (dark blue).
    pub right: Colour,

    /// Per-channel noise is drawn uniformly from `-noise..=noise`.
    pub noise: i32,

    /// Standard deviation of the smoothing blur.
    pub blur_sigma: f32,
}

impl Default for GradientSynthesizer {
    fn default() -> Self {
        Self {
            left: Colour::rgb(25, 25, 25),
            mid: Colour::rgb(20, 22, 35),
            right: Colour::rgb(15, 20, 45),
            noise: 2,
            blur_sigma: 3.0,
        }
    }
}

impl GradientSynthesizer {
    /// Noise-free gradient colour of column `x` in an image `width` wide.
    ///
    /// `width` must be positive.
    pub fn column_colour(&self, x: u32, width: u32) -> Colour {
        let half = width as f64 / 2.0;
        let x = x as f64;
        if x < half {
            Colour::lerp(self.left, self.mid, x / half)
        } else {
            Colour::lerp(self.mid, self.right, (x - half) / half)
        }
    }

    /// Fill a new canvas with the noisy gradient, without the final blur.
    pub fn fill<R: Rng + ?Sized>(&self, width: u32, height: u32, rng: &mut R) -> Result<Canvas> {
        let mut canvas = Canvas::new(width, height)?;

        for x in 0..width {
            let base = self.column_colour(x, width);
            for y in 0..height {
                let mut noise = || rng.gen_range(-self.noise..=self.noise);
                let pixel = base.shifted(noise(), noise(), noise());
                canvas.set_pixel(x as i32, y as i32, pixel);
            }
        }

        Ok(canvas)
    }

    /// Build the finished background: noisy gradient followed by the blur.
    ///
    /// Fails with `InvalidDimensions` when either dimension is zero.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Canvas> {
        Ok(self.fill(width, height, rng)?.blur(self.blur_sigma))
    }
}
