use clap::Parser;
use geowall::cli::Cli;
use geowall::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    geowall::cli::generate::run(cli.generate, &printer)?;

    Ok(())
}
