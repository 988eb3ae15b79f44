//! This crate contains the source code for the binary for the game twentyfortyeight.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use twentyfortyeight::App;

/// Command-line arguments for the game binary.
///
/// This structure declares the flags the binary accepts. The only configuration the game takes is
/// an optional seed for the random tile generator, which makes entire runs reproducible.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the random tile generator, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();

    let mut terminal = ratatui::init();
    let result = App::new(cli.seed).run(&mut terminal);
    ratatui::restore();

    result
}
