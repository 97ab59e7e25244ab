//! Wallpaper composition.
//!
//! A wallpaper is a gradient background with a fixed number of placement
//! attempts scattered over it. Each attempt samples a position, a size and
//! a shape kind; attempts that land off the canvas are dropped rather than
//! retried, so the number of shapes drawn varies from run to run.

use image::RgbImage;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::WallpaperConfig;
use crate::error::{GeowallError, Result};
use crate::render::{Canvas, GradientSynthesizer, ShapeRenderer};
use crate::types::{Colour, Point, ShapeKind};

const CUBE_OR_CRYSTAL: [ShapeKind; 2] = [ShapeKind::Cube, ShapeKind::Crystal];
const CUBE_OR_PYRAMID: [ShapeKind; 2] = [ShapeKind::Cube, ShapeKind::Pyramid];

/// A sampled shape position, before or after the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: ShapeKind,
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

impl Placement {
    /// Whether the shape's bounding box lies fully inside a `width` x `height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        let size = self.size as i64;
        (0..=width as i64 - size).contains(&self.x) && (0..=height as i64 - size).contains(&self.y)
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Result of one placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// The horizontal sample fell outside the image.
    OffAxis,

    /// The jittered shape would not fit inside the image.
    OutOfBounds(Placement),

    /// The shape fits and should be drawn.
    Accepted(Placement),
}

/// What happened during composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    pub attempts: usize,
    pub off_axis: usize,
    pub out_of_bounds: usize,

    /// Accepted attempts, including kinds that draw nothing.
    pub placed: usize,

    /// Segments stroked over all placed shapes.
    pub segments: usize,

    /// Placed shapes per kind, indexed by [`ShapeKind::index`].
    by_kind: [usize; 5],
}

impl PlacementReport {
    /// Number of placed shapes of `kind`.
    pub fn placed_of(&self, kind: ShapeKind) -> usize {
        self.by_kind[kind.index()]
    }

    /// Placed shapes that actually produced an outline.
    pub fn drawn(&self) -> usize {
        ShapeKind::ALL
            .iter()
            .filter(|kind| kind.has_geometry())
            .map(|&kind| self.placed_of(kind))
            .sum()
    }
}

/// A finished wallpaper.
#[derive(Debug, Clone)]
pub struct Wallpaper {
    pub image: RgbImage,
    pub report: PlacementReport,
}

/// Builds wallpapers from a background and scattered outlines.
#[derive(Debug, Clone, Default)]
pub struct WallpaperComposer {
    config: WallpaperConfig,
    synthesizer: GradientSynthesizer,
    renderer: ShapeRenderer,
}

impl WallpaperComposer {
    pub fn new(config: WallpaperConfig) -> Self {
        Self {
            config,
            synthesizer: GradientSynthesizer::default(),
            renderer: ShapeRenderer::new(),
        }
    }

    /// Replace the background synthesizer.
    pub fn with_synthesizer(mut self, synthesizer: GradientSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn config(&self) -> &WallpaperConfig {
        &self.config
    }

    /// Compose a wallpaper at the configured default size.
    pub fn compose_default<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Wallpaper> {
        self.compose(self.config.width, self.config.height, rng)
    }

    /// Compose a `width` x `height` wallpaper.
    ///
    /// Runs exactly `config.attempts` placement attempts, then applies the
    /// final blur.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Wallpaper> {
        if self.config.base_sizes.is_empty() {
            return Err(GeowallError::Generation {
                message: "no base sizes configured".to_string(),
            });
        }

        let mut canvas = self.synthesizer.synthesize(width, height, rng)?;
        let x_dist = self.x_distribution(width)?;
        let mut report = PlacementReport::default();

        for _ in 0..self.config.attempts {
            let attempt = self.sample_attempt(&x_dist, width, height, rng);
            self.apply_attempt(&mut canvas, attempt, rng, &mut report);
        }

        let image = canvas.blur(self.config.final_blur_sigma).into_image();
        Ok(Wallpaper { image, report })
    }

    /// Horizontal placement distribution for an image `width` wide.
    pub fn x_distribution(&self, width: u32) -> Result<Normal<f64>> {
        let width = width as f64;
        Normal::new(width * self.config.x_mean, width * self.config.x_spread).map_err(|e| {
            GeowallError::Generation {
                message: format!("invalid placement distribution: {}", e),
            }
        })
    }

    /// Sample one placement attempt. Does not touch any image.
    ///
    /// `base_sizes` must not be empty.
    pub fn sample_attempt<R: Rng + ?Sized>(
        &self,
        x_dist: &Normal<f64>,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Attempt {
        let config = &self.config;

        let x = x_dist.sample(rng).trunc();
        if x < 0.0 || x > width as f64 {
            return Attempt::OffAxis;
        }
        let x = x as i64;

        let y = rng.gen_range(0..=height.saturating_sub(config.y_margin)) as i64;

        let base = config.base_sizes[rng.gen_range(0..config.base_sizes.len())] as i64;
        let size = (base + rng.gen_range(-config.size_jitter..=config.size_jitter) as i64).max(0);

        let kind = self.select_kind(x as f64 / width as f64, rng);

        let jitter = config.position_jitter;
        let placement = Placement {
            kind,
            x: x + rng.gen_range(-jitter..=jitter) as i64,
            y: y + rng.gen_range(-jitter..=jitter) as i64,
            size: size as u32,
        };

        if placement.fits(width, height) {
            Attempt::Accepted(placement)
        } else {
            Attempt::OutOfBounds(placement)
        }
    }

    /// Draw an accepted attempt onto `canvas` and record the outcome.
    ///
    /// Rejected attempts leave the canvas untouched and draw no randomness.
    pub fn apply_attempt<R: Rng + ?Sized>(
        &self,
        canvas: &mut Canvas,
        attempt: Attempt,
        rng: &mut R,
        report: &mut PlacementReport,
    ) {
        report.attempts += 1;

        let placement = match attempt {
            Attempt::OffAxis => {
                report.off_axis += 1;
                return;
            }
            Attempt::OutOfBounds(_) => {
                report.out_of_bounds += 1;
                return;
            }
            Attempt::Accepted(placement) => placement,
        };

        let colour = self.outline_colour(rng);
        report.segments += self.renderer.draw_outline(
            canvas,
            placement.kind,
            placement.anchor(),
            placement.size,
            colour,
        );
        report.placed += 1;
        report.by_kind[placement.kind.index()] += 1;
    }

    /// Pick a shape kind for a horizontal position ratio (`x / width`).
    ///
    /// The right of the image gets every kind, the middle cubes and
    /// crystals, the left cubes and pyramids.
    pub fn select_kind<R: Rng + ?Sized>(&self, position_ratio: f64, rng: &mut R) -> ShapeKind {
        let choices: &[ShapeKind] = if position_ratio > self.config.all_kinds_above {
            &ShapeKind::ALL
        } else if position_ratio > self.config.crystals_above {
            &CUBE_OR_CRYSTAL
        } else {
            &CUBE_OR_PYRAMID
        };
        choices[rng.gen_range(0..choices.len())]
    }

    /// Sample a light grey outline colour with a slight blue tint.
    pub fn outline_colour<R: Rng + ?Sized>(&self, rng: &mut R) -> Colour {
        let (low, high) = self.config.outline_grey;
        let grey = rng.gen_range(low..=high) as i32;
        let tint = rng.gen_range(0..=self.config.outline_tint) as i32;
        Colour::clamped(grey, grey, grey + tint)
    }
}
