//! geowall - Geometric wallpaper generator
//!
//! Renders an ultrawide wallpaper: a soft three-colour gradient with
//! wireframe cubes, pyramids and crystals scattered across it.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use compose::{Attempt, Placement, PlacementReport, Wallpaper, WallpaperComposer};
pub use config::{WallpaperConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::{GeowallError, Result};
pub use render::{
    wallpaper_filename, write_png, Canvas, GradientSynthesizer, Outline, ShapeRenderer, Surface,
};
pub use types::{Colour, Point, ShapeKind};
