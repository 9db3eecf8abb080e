//! Board configuration and validation.

use std::error::Error;
use std::fmt;

use boxes_core::IndexError;
use boxes_lattice::Lattice;

/// Configuration for a [`Board`](crate::Board).
///
/// Fixed at construction; a board is never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Squares per side (`N`). Must be in `1..=Lattice::MAX_SIZE`.
    ///
    /// Default: 5 (25 squares, 60 sides).
    pub size: u32,
}

impl BoardConfig {
    /// Default squares per side.
    pub const DEFAULT_SIZE: u32 = 5;

    /// Create a config for an `size x size` grid.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Check that the size describes a buildable lattice.
    ///
    /// Called by [`Board::new`](crate::Board::new) through
    /// [`lattice`](Self::lattice); exposed so callers can reject a config
    /// before building anything from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lattice().map(|_| ())
    }

    /// Build the lattice described by this config.
    ///
    /// Returns `Err(ConfigError::InvalidSize)` wrapping the lattice's own
    /// rejection if `size` is zero or exceeds [`Lattice::MAX_SIZE`].
    pub fn lattice(&self) -> Result<Lattice, ConfigError> {
        Lattice::new(self.size).map_err(ConfigError::InvalidSize)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BoardConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `size` does not describe a lattice: it is zero or too large.
    InvalidSize(IndexError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(e) => write!(f, "invalid board size: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSize(e) => Some(e),
        }
    }
}
