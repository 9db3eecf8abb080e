//! Lattice invariant test helpers.
//!
//! These functions exhaustively verify the translator and resolver
//! contracts for one lattice. Reused by the unit tests for every grid size.

use crate::lattice::Lattice;
use boxes_core::{Orientation, Position, SideIndex, SquareIndex};
use indexmap::{IndexMap, IndexSet};

/// Assert the derived counts: `N^2` squares, `2 * N * (N + 1)` sides.
pub fn assert_counts(lattice: &Lattice) {
    let n = lattice.size();
    assert_eq!(lattice.total_squares(), n * n, "total_squares for N={n}");
    assert_eq!(lattice.total_sides(), 2 * n * (n + 1), "total_sides for N={n}");
}

/// Assert `square_index(square_position(i)) == i` for every square.
pub fn assert_square_round_trip(lattice: &Lattice) {
    for square in lattice.squares() {
        let position = lattice
            .square_position(square)
            .expect("square_position should accept every listed square");
        assert_eq!(
            lattice.square_index(position),
            square,
            "round trip failed for {square} via {position}"
        );
        assert_eq!(lattice.checked_square_index(position), Some(square));
    }
}

/// Assert every side belongs to exactly one orientation and its anchor
/// translates back to the same side.
pub fn assert_side_anchor_round_trip(lattice: &Lattice) {
    for side in lattice.sides() {
        let vertical = lattice.side_position(side, Orientation::Vertical);
        let horizontal = lattice.side_position(side, Orientation::Horizontal);
        assert!(
            vertical.is_some() != horizontal.is_some(),
            "side {side} resolved as vertical={vertical:?} horizontal={horizontal:?}"
        );
        let anchor = lattice
            .side_anchor(side)
            .expect("side_anchor should accept every listed side");
        assert_eq!(lattice.side_index(anchor), Some(side), "anchor {anchor}");
    }
}

/// Assert that the band sweep yields `N + 1` vertical bands of `N` sides
/// and `N` horizontal bands of `N + 1` sides.
pub fn assert_band_layout(lattice: &Lattice) {
    let n = lattice.size();
    let mut vertical_per_row: IndexMap<u32, u32> = IndexMap::new();
    let mut horizontal_per_row: IndexMap<u32, u32> = IndexMap::new();
    for side in lattice.sides() {
        let anchor = lattice.side_anchor(side).expect("listed side");
        let rows = match anchor.orientation {
            Orientation::Vertical => &mut vertical_per_row,
            Orientation::Horizontal => &mut horizontal_per_row,
        };
        *rows.entry(anchor.position.row).or_insert(0) += 1;
    }
    assert_eq!(vertical_per_row.len() as u32, n + 1);
    assert!(vertical_per_row.values().all(|&count| count == n));
    assert_eq!(horizontal_per_row.len() as u32, n);
    assert!(horizontal_per_row.values().all(|&count| count == n + 1));
}

/// Assert `squares_for_side` is ascending, duplicate-free, and in range.
pub fn assert_adjacency_sorted(lattice: &Lattice) {
    for side in lattice.sides() {
        let squares = lattice.squares_for_side(side).expect("listed side");
        assert!(
            squares.windows(2).all(|w| w[0] < w[1]),
            "squares_for_side({side}) not strictly ascending: {squares:?}"
        );
        for square in &squares {
            assert!(lattice.check_square(*square).is_ok(), "side {side} -> {square}");
        }
    }
}

/// Assert outer-edge sides border one square and interior sides two.
///
/// The outer edge is derived from the anchor alone: first or last dot row
/// for vertical sides, first or last dot column for horizontal sides.
pub fn assert_boundary_degree(lattice: &Lattice) {
    let last = lattice.dots_per_side();
    let mut boundary = 0;
    for side in lattice.sides() {
        let anchor = lattice.side_anchor(side).expect("listed side");
        let Position { row, col } = anchor.position;
        let on_edge = match anchor.orientation {
            Orientation::Vertical => row == 1 || row == last,
            Orientation::Horizontal => col == 1 || col == last,
        };
        let expected = if on_edge { 1 } else { 2 };
        let squares = lattice.squares_for_side(side).expect("listed side");
        assert_eq!(
            squares.len(),
            expected,
            "side {side} ({anchor}) borders {squares:?}"
        );
        if on_edge {
            boundary += 1;
        }
    }
    assert_eq!(boundary, 4 * lattice.size(), "perimeter side count");
}

/// Assert `sides_for_square` and `squares_for_side` agree in both
/// directions: every square has four distinct sides, each pointing back
/// to it, and every side appears among the sides of each square it borders.
pub fn assert_square_sides_consistent(lattice: &Lattice) {
    let mut degree: IndexMap<SquareIndex, usize> = IndexMap::new();
    for side in lattice.sides() {
        for square in lattice.squares_for_side(side).expect("listed side") {
            *degree.entry(square).or_insert(0) += 1;
            let sides = lattice.sides_for_square(square).expect("resolved square");
            assert!(sides.contains(&side), "{side} missing from sides of {square}");
        }
    }
    for square in lattice.squares() {
        let sides = lattice.sides_for_square(square).expect("listed square");
        let unique: IndexSet<SideIndex> = sides.iter().copied().collect();
        assert_eq!(unique.len(), 4, "duplicate sides for {square}: {sides:?}");
        for side in sides {
            let squares = lattice.squares_for_side(side).expect("bounding side");
            assert!(squares.contains(&square), "{square} missing from {side}");
        }
        assert_eq!(degree.get(&square), Some(&4), "border count of {square}");
    }
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &Lattice) {
    assert_counts(lattice);
    assert_square_round_trip(lattice);
    assert_side_anchor_round_trip(lattice);
    assert_band_layout(lattice);
    assert_adjacency_sorted(lattice);
    assert_boundary_degree(lattice);
    assert_square_sides_consistent(lattice);
}
