//! PNG output for finished wallpapers.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use uuid::Uuid;

use crate::error::{GeowallError, Result};

/// Prefix shared by every generated wallpaper file.
pub const FILE_PREFIX: &str = "geometric_wallpaper_";

/// File name for a wallpaper identified by `id`.
///
/// e.g. `geometric_wallpaper_3fa85f64-5717-4562-b3fc-2c963f66afa6.png`
pub fn wallpaper_filename(id: Uuid) -> String {
    format!("{FILE_PREFIX}{}.png", id.hyphenated())
}

/// Write an RGB image to a PNG file.
///
/// The image is written as-is: three channels, no alpha, no scaling.
pub fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| GeowallError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
