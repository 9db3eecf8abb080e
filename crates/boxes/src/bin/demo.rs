//! Plays the canned opening on a 5x5 board and prints the result.
//!
//! Logs go to stderr (`RUST_LOG` overrides the default `info` filter);
//! stdout carries only the board.

use boxes::board::{BoardConfig, BoardError};
use boxes::demo;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BoardError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (board, log) = demo::play_opening(BoardConfig::default())?;
    info!(
        moves = log.len(),
        drawn = board.drawn_count(),
        claimed = board.claimed_count(demo::OPENING_PLAYER),
        "demo finished"
    );
    print!("{board}");
    Ok(())
}
