//! Core types for the boxes board engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the lattice and board crates: 1-based side and
//! square indices, grid positions, side orientations, players, square
//! ownership, and the index error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod player;
pub mod position;

pub use error::{IndexError, IndexKind};
pub use id::{SideIndex, SquareIndex};
pub use player::{Owner, Player};
pub use position::{Orientation, Position, SideAnchor};
