//! Error types for index translation.

use std::error::Error;
use std::fmt;

/// Which index space an out-of-range value was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKind {
    /// A [`SideIndex`](crate::SideIndex), valid in `[1, total_sides]`.
    Side,
    /// A [`SquareIndex`](crate::SquareIndex), valid in `[1, total_squares]`.
    Square,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Side => write!(f, "side"),
            Self::Square => write!(f, "square"),
        }
    }
}

/// Errors from lattice construction or index translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// An index is outside its valid 1-based range.
    OutOfRange {
        /// Index space the value belongs to.
        kind: IndexKind,
        /// The offending index.
        index: u32,
        /// Largest valid index.
        max: u32,
    },
    /// Attempted to construct a grid with zero squares per side.
    EmptyGrid,
    /// The requested grid size exceeds the supported maximum.
    SizeTooLarge {
        /// The requested squares per side.
        size: u32,
        /// Largest supported squares per side.
        max: u32,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { kind, index, max } => {
                write!(f, "{kind} index {index} out of range [1, {max}]")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one square per side"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum {max}")
            }
        }
    }
}

impl Error for IndexError {}
