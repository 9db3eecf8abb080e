//! Board-level error types.

use std::error::Error;
use std::fmt;

use boxes_core::IndexError;

use crate::config::ConfigError;

/// Errors from board construction or move application.
///
/// Drawing a side that is already drawn is not an error; see
/// [`Board::draw_side`](crate::Board::draw_side).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The board configuration failed validation.
    Config(ConfigError),
    /// A side or square index is outside the board. Never produced by
    /// [`Board::new`](crate::Board::new).
    Index(IndexError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Index(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Index(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BoardError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<IndexError> for BoardError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}
