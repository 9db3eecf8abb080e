//! Lattice geometry for dots-and-boxes boards.
//!
//! This crate defines [`Lattice`], the pure index translator for an `N x N`
//! grid of squares inside an `(N + 1) x (N + 1)` dot lattice, together with
//! the adjacency resolver built on top of it.
//!
//! # Index spaces
//!
//! - **Square indices** run `1..=N^2` in row-major order.
//! - **Side indices** run `1..=2N(N+1)`, sweeping the lattice in bands of
//!   `N` vertical then `N + 1` horizontal sides per dot row.
//! - **Positions** are 1-indexed `(row, col)` pairs.
//!
//! # Adjacency
//!
//! [`Lattice::squares_for_side`] returns the one or two squares a side
//! borders; [`Lattice::sides_for_square`] returns the four sides of a
//! square.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
mod bands;
pub mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::SideSquares;
pub use boxes_core::IndexError;
pub use lattice::Lattice;
