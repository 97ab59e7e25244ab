//! Generate command implementation.
//!
//! Composes one wallpaper and writes it as a uniquely named PNG.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::compose::{Wallpaper, WallpaperComposer};
use crate::config::WallpaperConfig;
use crate::error::{GeowallError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{wallpaper_filename, write_png};
use crate::types::ShapeKind;

/// Generate a geometric wallpaper
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed for the random generator (same seed, same image)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    pub output_dir: PathBuf,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let path = generate_to(
        &args.output_dir,
        WallpaperConfig::default(),
        args.seed,
        printer,
    )?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("Geometric wallpaper {} generated successfully!", filename);

    Ok(())
}

/// Compose a wallpaper with `config` and write it into `dir`.
///
/// Returns the path of the written file.
pub fn generate_to(
    dir: &Path,
    config: WallpaperConfig,
    seed: Option<u64>,
    printer: &Printer,
) -> Result<PathBuf> {
    // Create output directory if needed
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| GeowallError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let seed_note = seed.map(|s| format!(" (seed {})", s)).unwrap_or_default();
    printer.status(
        "Generating",
        &format!("{}x{} wallpaper{}", config.width, config.height, seed_note),
    );

    let composer = WallpaperComposer::new(config);
    let wallpaper = composer.compose_default(&mut rng)?;
    report_placements(&wallpaper, composer.config().attempts, printer);

    let path = dir.join(wallpaper_filename(Uuid::new_v4()));
    write_png(&wallpaper.image, &path)?;
    printer.status("Finished", &printer.cyan(&display_path(&path)));

    Ok(path)
}

fn report_placements(wallpaper: &Wallpaper, attempts: usize, printer: &Printer) {
    let report = &wallpaper.report;
    let rejected = report.off_axis + report.out_of_bounds;
    printer.info(
        "Placed",
        &format!(
            "{} of {} {}",
            plural(report.drawn(), "shape", "shapes"),
            attempts,
            printer.dim(&format!("({} rejected)", rejected)),
        ),
    );

    let skipped = report.placed - report.drawn();
    if skipped > 0 {
        let kinds: Vec<&str> = ShapeKind::ALL
            .iter()
            .filter(|k| !k.has_geometry() && report.placed_of(**k) > 0)
            .map(|k| k.name())
            .collect();
        printer.warning(
            "Skipped",
            &format!(
                "{} without geometry: {}",
                plural(skipped, "shape", "shapes"),
                kinds.join(", ")
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FILE_PREFIX;
    use tempfile::tempdir;

    fn small() -> WallpaperConfig {
        WallpaperConfig {
            width: 320,
            height: 180,
            ..WallpaperConfig::default()
        }
    }

    #[test]
    fn test_generate_writes_png() {
        let dir = tempdir().unwrap();
        let path = generate_to(dir.path(), small(), Some(3), &Printer::plain()).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(FILE_PREFIX));
        assert!(name.ends_with(".png"));

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgb8);
        assert_eq!((img.width(), img.height()), (320, 180));
    }

    #[test]
    fn test_generate_creates_output_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = generate_to(&nested, small(), None, &Printer::plain()).unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_same_seed_same_pixels_different_names() {
        let dir = tempdir().unwrap();
        let a = generate_to(dir.path(), small(), Some(11), &Printer::plain()).unwrap();
        let b = generate_to(dir.path(), small(), Some(11), &Printer::plain()).unwrap();

        assert_ne!(a, b);
        let a = image::open(&a).unwrap().to_rgb8();
        let b = image::open(&b).unwrap().to_rgb8();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_generate_rejects_zero_width() {
        let dir = tempdir().unwrap();
        let config = WallpaperConfig {
            width: 0,
            ..small()
        };
        let err = generate_to(dir.path(), config, Some(1), &Printer::plain()).unwrap_err();
        assert!(matches!(err, GeowallError::InvalidDimensions { .. }));
    }
}
