//! Strongly-typed 1-based indices for sides and squares.

use std::fmt;

/// Identifies one side (unit edge) of the dot lattice.
///
/// Sides are numbered from 1 by sweeping the lattice in bands; see
/// [`Orientation`](crate::Orientation) for the band layout.
/// `SideIndex(n)` is the n-th side of that sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SideIndex(pub u32);

impl SideIndex {
    /// Zero-based offset into side storage.
    ///
    /// Only meaningful for indices already validated against a lattice.
    ///
    /// # Panics
    ///
    /// Panics if the index is 0, which no lattice contains.
    pub fn offset(self) -> usize {
        assert!(self.0 >= 1, "SideIndex is 1-based, got 0");
        self.0 as usize - 1
    }
}

impl fmt::Display for SideIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SideIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies one unit square of the grid.
///
/// Squares are numbered from 1 in row-major order: square 1 is the
/// top-left cell, square `N` the top-right, square `N²` the bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareIndex(pub u32);

impl SquareIndex {
    /// Zero-based offset into square storage.
    ///
    /// Only meaningful for indices already validated against a lattice.
    ///
    /// # Panics
    ///
    /// Panics if the index is 0, which no lattice contains.
    pub fn offset(self) -> usize {
        assert!(self.0 >= 1, "SquareIndex is 1-based, got 0");
        self.0 as usize - 1
    }
}

impl fmt::Display for SquareIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SquareIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
