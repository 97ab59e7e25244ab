//! Core value types for geowall.
//!
//! - `Colour` - RGB colour values with clamping and interpolation
//! - `Point` - integer pixel coordinates
//! - `ShapeKind` - the closed set of wireframe shapes

mod colour;
mod point;
mod shape;

pub use colour::Colour;
pub use point::Point;
pub use shape::ShapeKind;
