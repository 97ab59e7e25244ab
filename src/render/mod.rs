//! Rendering module for geowall.
//!
//! This module owns the pixel buffer and everything that paints into it:
//! the gradient background, shape outlines and PNG output.

mod canvas;
mod gradient;
mod png;
mod shape;

pub use canvas::{Canvas, Surface};
pub use gradient::GradientSynthesizer;
pub use png::{wallpaper_filename, write_png, FILE_PREFIX};
pub use shape::{Outline, ShapeRenderer};
