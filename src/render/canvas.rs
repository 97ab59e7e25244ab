//! Owned RGB pixel buffer and the stroking surface used by outlines.

use image::imageops;
use image::RgbImage;

use crate::error::{GeowallError, Result};
use crate::types::{Colour, Point};

/// Something line segments can be stroked onto.
///
/// Outlines only ever draw through this trait, so the renderer can be
/// exercised against a recording surface as well as a real [`Canvas`].
pub trait Surface {
    /// Stroke a 1-pixel-wide segment from `from` to `to`, inclusive.
    ///
    /// Pixels outside the surface are skipped. A zero-length segment
    /// plots a single pixel.
    fn stroke(&mut self, from: Point, to: Point, colour: Colour);
}

/// A mutable wallpaper image.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a black canvas. Both dimensions must be positive.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeowallError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&p| p.into())
    }

    /// Set a pixel. Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = colour.into();
        }
    }

    /// Gaussian blur with standard deviation `sigma`, consuming the canvas.
    pub fn blur(self, sigma: f32) -> Self {
        Self {
            image: imageops::blur(&self.image, sigma),
        }
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Hand the underlying image off.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl Surface for Canvas {
    // Bresenham, integer-only.
    fn stroke(&mut self, from: Point, to: Point, colour: Colour) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.set_pixel(x, y, colour);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> Vec<(u32, u32)> {
        canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != [0, 0, 0])
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(GeowallError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Canvas::new(10, 0).is_err());
    }

    #[test]
    fn test_new_dimensions() {
        let canvas = Canvas::new(7, 3).unwrap();
        assert_eq!(canvas.width(), 7);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.get(6, 2), Some(Colour::BLACK));
        assert_eq!(canvas.get(7, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set_pixel(-1, 0, Colour::WHITE);
        canvas.set_pixel(2, 0, Colour::WHITE);
        canvas.set_pixel(0, 5, Colour::WHITE);
        assert!(lit(&canvas).is_empty());

        canvas.set_pixel(1, 1, Colour::WHITE);
        assert_eq!(canvas.get(1, 1), Some(Colour::WHITE));
    }

    #[test]
    fn test_stroke_horizontal() {
        let mut canvas = Canvas::new(5, 3).unwrap();
        canvas.stroke(Point::new(0, 1), Point::new(4, 1), Colour::WHITE);
        assert_eq!(lit(&canvas), vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    }

    #[test]
    fn test_stroke_diagonal_reversed() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.stroke(Point::new(3, 3), Point::new(0, 0), Colour::WHITE);
        assert_eq!(lit(&canvas), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_stroke_zero_length_plots_one_pixel() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.stroke(Point::new(1, 1), Point::new(1, 1), Colour::WHITE);
        assert_eq!(lit(&canvas), vec![(1, 1)]);
    }

    #[test]
    fn test_stroke_clips_to_bounds() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.stroke(Point::new(-2, 1), Point::new(5, 1), Colour::WHITE);
        assert_eq!(lit(&canvas), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_blur_keeps_dimensions_and_spreads() {
        let mut canvas = Canvas::new(9, 9).unwrap();
        canvas.set_pixel(4, 4, Colour::WHITE);
        let blurred = canvas.blur(1.0);

        assert_eq!(blurred.width(), 9);
        assert_eq!(blurred.height(), 9);
        let centre = blurred.get(4, 4).unwrap();
        let neighbour = blurred.get(5, 4).unwrap();
        assert!(centre.r < 255);
        assert!(neighbour.r > 0);
    }
}
