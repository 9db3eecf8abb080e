//! Board state and move application for dots-and-boxes.
//!
//! A [`Board`] owns the drawn flag of every side and the border count and
//! owner of every square of one grid. Moves are applied with
//! [`Board::draw_side`]: the side is marked drawn, the one or two squares
//! it borders gain a border, and any square reaching four borders is
//! claimed by the drawing player.
//!
//! Geometry (which squares a side borders) comes from
//! [`boxes_lattice::Lattice`]; this crate only holds state.
//!
//! The [`render`](mod@render) module turns a board into the plain-text grid
//! printed by the demo binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
pub mod error;
pub mod render;
pub mod square;

pub use board::{Board, DrawOutcome};
pub use config::{BoardConfig, ConfigError};
pub use error::BoardError;
pub use render::render;
pub use square::Square;
