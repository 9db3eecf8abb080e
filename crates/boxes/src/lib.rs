//! Boxes: a dots-and-boxes board engine.
//!
//! Everything needed to set up a grid, draw sides and print the result is
//! re-exported here under [`prelude`]; the geometry and board crates stay
//! reachable by name for finer-grained imports.
//!
//! # Quick start
//!
//! ```rust
//! use boxes::prelude::*;
//!
//! let mut board = Board::new(BoardConfig::new(3)).unwrap();
//! assert_eq!(board.lattice().total_sides(), 24);
//!
//! // Close the top-left square.
//! for side in board.lattice().sides_for_square(SquareIndex(1)).unwrap() {
//!     board.draw_side(side, Player::O).unwrap();
//! }
//! assert_eq!(board.claimed_count(Player::O), 1);
//! print!("{board}");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `boxes-core` | Indices, positions, orientations, players, index errors |
//! | [`lattice`] | `boxes-lattice` | Index translator and adjacency resolver |
//! | [`board`] | `boxes-board` | Board state, move application, config, rendering |
//! | [`demo`] | this crate | The canned opening played by `boxes-demo` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`boxes-core`).
///
/// Side and square indices, positions, orientations, players, and the
/// [`types::IndexError`] returned by index translation.
pub use boxes_core as types;

/// Lattice geometry (`boxes-lattice`).
///
/// [`lattice::Lattice`] converts between side indices, square indices, and
/// positions, and resolves which squares a side borders.
pub use boxes_lattice as lattice;

/// Board state (`boxes-board`).
///
/// [`board::Board`] applies moves; [`board::render`] draws it as text.
pub use boxes_board as board;

pub mod demo;

/// Common imports for typical boxes usage.
///
/// ```rust
/// use boxes::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use boxes_core::{
        Orientation, Owner, Player, Position, SideAnchor, SideIndex, SquareIndex,
    };

    // Errors
    pub use boxes_board::{BoardError, ConfigError};
    pub use boxes_core::IndexError;

    // Geometry
    pub use boxes_lattice::Lattice;

    // Board
    pub use boxes_board::{render, Board, BoardConfig, DrawOutcome, Square};
}
