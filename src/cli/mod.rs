pub mod generate;

use clap::Parser;

/// geowall - Geometric ultrawide wallpaper generator
#[derive(Parser, Debug)]
#[command(name = "geowall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}
