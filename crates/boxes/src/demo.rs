//! The canned opening played by the `boxes-demo` binary.

use boxes_board::{Board, BoardConfig, BoardError};
use boxes_core::{Player, SideIndex};
use tracing::{info, warn};

/// Sides drawn by the demo, in order. Closes square 1 on a 5x5 board.
pub const OPENING: [u32; 6] = [1, 6, 7, 12, 11, 20];

/// Player who draws every side of the opening.
pub const OPENING_PLAYER: Player = Player::X;

/// Result of one opening move: the side and the squares it touched
/// (`None` if the side was already drawn).
pub type MoveLog = Vec<(SideIndex, Option<u8>)>;

/// Play [`OPENING`] on a board built from `config`.
///
/// Returns the board and the per-move results.
pub fn play_opening(config: BoardConfig) -> Result<(Board, MoveLog), BoardError> {
    let mut board = Board::new(config)?;
    info!(size = board.lattice().size(), "playing demo opening");
    let mut log = Vec::with_capacity(OPENING.len());
    for side in OPENING.map(SideIndex) {
        let touched = board.draw_side(side, OPENING_PLAYER)?;
        match touched {
            Some(count) => info!(side = side.0, touched = count, "side drawn"),
            None => warn!(side = side.0, "side already drawn"),
        }
        log.push((side, touched));
    }
    Ok((board, log))
}
