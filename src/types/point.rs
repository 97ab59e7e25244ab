//! Integer pixel coordinates.

/// A point in image space: origin top-left, x right, y down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by fractional amounts, rounding each axis to the nearest pixel.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(
            (self.x as f64 + dx).round() as i32,
            (self.y as f64 + dy).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_rounds() {
        let p = Point::new(10, 20);
        assert_eq!(p.offset(0.0, 0.0), p);
        assert_eq!(p.offset(33.4, 66.6), Point::new(43, 87));
        assert_eq!(p.offset(0.5, -0.5), Point::new(11, 20));
    }
}
