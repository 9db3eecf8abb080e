//! Benchmark profiles for the boxes board engine.
//!
//! - [`shuffled_sides`]: a deterministic permutation of every side of a grid
//! - [`finished_board`]: a board with every side drawn, for render benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use boxes_board::{Board, BoardError};
use boxes_core::{Player, SideIndex};
use boxes_lattice::Lattice;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Every side of `lattice` in a deterministic, seed-dependent order.
///
/// The same `seed` always yields the same order.
pub fn shuffled_sides(lattice: &Lattice, seed: u64) -> Vec<SideIndex> {
    let mut order: Vec<SideIndex> = lattice.sides().collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);
    order
}

/// Play every side of an `size x size` board in `order`, alternating
/// players each move.
pub fn play_all(size: u32, order: &[SideIndex]) -> Result<Board, BoardError> {
    let mut board = Board::with_size(size)?;
    for (turn, &side) in order.iter().enumerate() {
        board.draw_side(side, Player::ALL[turn % 2])?;
    }
    Ok(board)
}

/// A fully played `size x size` board.
pub fn finished_board(size: u32, seed: u64) -> Result<Board, BoardError> {
    let lattice = Lattice::new(size)?;
    play_all(size, &shuffled_sides(&lattice, seed))
}
