//! Plain-text board rendering.
//!
//! The board is drawn one lattice row per line, `2N + 1` lines in all.
//! Dot rows interleave dots with vertical sides; the rows between them
//! interleave horizontal sides with the owner marker of the square to the
//! right of each side:
//!
//! ```text
//! ._. . .
//! |X|   |
//! ._. . .
//!
//! . . . .
//!
//! . . . .
//! ```

use std::fmt;

use boxes_core::{Orientation, Position, SideAnchor, SideIndex};

use crate::board::Board;

/// A lattice dot.
pub const DOT: char = '.';
/// A drawn vertical side (one running along a dot row).
pub const VERTICAL_SIDE: char = '_';
/// A drawn horizontal side (one joining two dot rows).
pub const HORIZONTAL_SIDE: char = '|';
/// An undrawn side or an unclaimed square.
pub const BLANK: char = ' ';

/// Render `board` to a string. Same output as the `Display` impl.
pub fn render(board: &Board) -> String {
    board.to_string()
}

/// Write the text rendering of `board` into `w`.
pub fn write_board<W: fmt::Write>(board: &Board, w: &mut W) -> fmt::Result {
    let n = board.lattice().size();
    for row in 1..=n + 1 {
        for col in 1..=n {
            w.write_char(DOT)?;
            let drawn = side_at(board, Orientation::Vertical, row, col)
                .is_some_and(|side| is_drawn(board, side));
            w.write_char(if drawn { VERTICAL_SIDE } else { BLANK })?;
        }
        w.write_char(DOT)?;
        w.write_char('\n')?;

        if row > n {
            break;
        }
        for col in 1..=n + 1 {
            let Some(side) = side_at(board, Orientation::Horizontal, row, col) else {
                continue;
            };
            let glyph = if is_drawn(board, side) { HORIZONTAL_SIDE } else { BLANK };
            w.write_char(glyph)?;
            if col <= n {
                w.write_char(owner_marker(board, Position::new(row, col)))?;
            }
        }
        w.write_char('\n')?;
    }
    Ok(())
}

fn side_at(board: &Board, orientation: Orientation, row: u32, col: u32) -> Option<SideIndex> {
    board.lattice().side_index(SideAnchor {
        orientation,
        position: Position::new(row, col),
    })
}

/// Anchors only come from `side_index`, so `side` is in range.
fn is_drawn(board: &Board, side: SideIndex) -> bool {
    board.sides()[side.offset()]
}

/// Marker of the square at `position`, the one right of the side
/// anchored there.
fn owner_marker(board: &Board, position: Position) -> char {
    let square = board.lattice().square_index(position);
    board.squares()[square.offset()]
        .owner()
        .player()
        .map_or(BLANK, |player| player.marker())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(self, f)
    }
}
