//! This crate contains the game logic and terminal interface for a rendition of the 2048
//! sliding-tile puzzle: a 4x4 board of power-of-two tiles that merge when slid in one of four
//! directions, with a new random tile spawned after every move, until no move can change the
//! board.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "Command-line parsing is handled by the binary crate."
)]

mod app;
mod board;
mod events;
mod spawn;
mod types;
mod ui;

pub use app::App;
