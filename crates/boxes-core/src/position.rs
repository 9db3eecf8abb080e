//! Grid positions, side orientations, and side anchors.

use std::fmt;

/// A 1-indexed `(row, col)` position.
///
/// When addressing a square, `1 <= row, col <= N`. When addressing the
/// anchor dot of a side, either component may reach `N + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row, counted from 1 at the top.
    pub row: u32,
    /// Column, counted from 1 at the left.
    pub col: u32,
}

impl Position {
    /// Create a position from its row and column.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u32, u32)> for Position {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// Which kind of band a side belongs to.
///
/// The side sweep alternates a band of `N` [`Vertical`](Self::Vertical)
/// sides with a band of `N + 1` [`Horizontal`](Self::Horizontal) sides,
/// starting and ending with a vertical band. A grid of size `N` therefore
/// has `N + 1` vertical bands and `N` horizontal bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Runs along a dot row between two neighbouring dots.
    ///
    /// Separates a square from the one stacked above or below it.
    /// Anchored at its left dot: `row` is the dot row (`1..=N+1`),
    /// `col` is `1..=N`.
    Vertical,
    /// Joins a dot to the dot directly below it.
    ///
    /// Separates a square from its left or right neighbour. Anchored at
    /// its top dot: `row` is `1..=N`, `col` is the dot column (`1..=N+1`).
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A side located in the dot lattice: its orientation and anchor dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SideAnchor {
    /// Band kind the side belongs to.
    pub orientation: Orientation,
    /// Anchor dot of the side.
    pub position: Position,
}

impl fmt::Display for SideAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} side at {}", self.orientation, self.position)
    }
}
