//! Fixed generation constants.
//!
//! Nothing here is read from files or the environment. The values exist as
//! a struct so tests and benchmarks can shrink or tweak a run without
//! touching the composer itself.

/// Default wallpaper width (ultrawide).
pub const DEFAULT_WIDTH: u32 = 5120;

/// Default wallpaper height.
pub const DEFAULT_HEIGHT: u32 = 1440;

/// Parameters for scattering shapes over the background.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperConfig {
    pub width: u32,
    pub height: u32,

    /// Placement attempts per wallpaper. Rejected attempts are not retried.
    pub attempts: usize,

    /// Candidate base sizes, picked uniformly.
    pub base_sizes: Vec<u32>,

    /// Sizes are jittered by `-size_jitter..=size_jitter`.
    pub size_jitter: i32,

    /// Anchors are jittered by `-position_jitter..=position_jitter` per axis.
    pub position_jitter: i32,

    /// Mean of the horizontal distribution, as a fraction of width.
    pub x_mean: f64,

    /// Standard deviation of the horizontal distribution, as a fraction of width.
    pub x_spread: f64,

    /// y is sampled from `0..=height - y_margin`.
    pub y_margin: u32,

    /// Beyond this position ratio any kind may be picked.
    pub all_kinds_above: f64,

    /// Beyond this position ratio cubes and crystals are picked; below it,
    /// cubes and pyramids.
    pub crystals_above: f64,

    /// Outline grey level range, inclusive.
    pub outline_grey: (u8, u8),

    /// Extra blue added to outlines, `0..=outline_tint`.
    pub outline_tint: u8,

    /// Standard deviation of the final softening blur.
    pub final_blur_sigma: f32,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            attempts: 70,
            base_sizes: vec![80, 100, 120, 140, 160],
            size_jitter: 20,
            position_jitter: 15,
            x_mean: 0.6,
            x_spread: 0.3,
            y_margin: 160,
            all_kinds_above: 0.7,
            crystals_above: 0.4,
            outline_grey: (180, 200),
            outline_tint: 15,
            final_blur_sigma: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WallpaperConfig::default();
        assert_eq!((config.width, config.height), (5120, 1440));
        assert_eq!(config.attempts, 70);
        assert_eq!(config.base_sizes, vec![80, 100, 120, 140, 160]);
        assert_eq!(config.final_blur_sigma, 0.5);
    }
}
