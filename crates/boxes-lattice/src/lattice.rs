//! Index translation between side indices, square indices, and positions.

use crate::bands;
use boxes_core::{IndexError, IndexKind, Orientation, Position, SideAnchor, SideIndex, SquareIndex};

/// The dot lattice of an `N x N` dots-and-boxes grid.
///
/// A lattice is pure geometry: it owns no board state, only the grid size.
/// It has `(N + 1)^2` dots, `N^2` squares, and `2 * N * (N + 1)` sides.
///
/// Sides are numbered from 1 by sweeping the lattice one dot row at a time:
/// the `N` vertical sides running along the dot row, then the `N + 1`
/// horizontal sides hanging below it. The sweep ends with the vertical band
/// of the last dot row.
///
/// # Examples
///
/// ```
/// use boxes_core::{Orientation, Position, SideIndex};
/// use boxes_lattice::Lattice;
///
/// let lattice = Lattice::new(5).unwrap();
/// assert_eq!(lattice.total_squares(), 25);
/// assert_eq!(lattice.total_sides(), 60);
///
/// // Side 7 is the second horizontal side of the first band.
/// assert_eq!(
///     lattice.side_position(SideIndex(7), Orientation::Horizontal),
///     Some(Position::new(1, 2))
/// );
/// assert_eq!(lattice.side_position(SideIndex(7), Orientation::Vertical), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    size: u32,
}

impl Lattice {
    /// Largest supported squares per side.
    ///
    /// Keeps `total_sides` and every intermediate band product within `u32`.
    pub const MAX_SIZE: u32 = 4096;

    /// Create a lattice with `size` squares per side.
    ///
    /// Returns `Err(IndexError::EmptyGrid)` if `size == 0`, or
    /// `Err(IndexError::SizeTooLarge)` if `size > MAX_SIZE`.
    pub fn new(size: u32) -> Result<Self, IndexError> {
        if size == 0 {
            return Err(IndexError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(IndexError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Squares per side (`N`).
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Dots per side (`N + 1`).
    pub fn dots_per_side(&self) -> u32 {
        self.size + 1
    }

    /// Number of squares (`N^2`).
    pub fn total_squares(&self) -> u32 {
        self.size * self.size
    }

    /// Number of sides (`2 * N * (N + 1)`).
    pub fn total_sides(&self) -> u32 {
        2 * self.size * (self.size + 1)
    }

    /// Width of one full band: `N` vertical plus `N + 1` horizontal sides.
    pub fn band_width(&self) -> u32 {
        2 * self.size + 1
    }

    /// All side indices in sweep order.
    pub fn sides(&self) -> impl Iterator<Item = SideIndex> {
        (1..=self.total_sides()).map(SideIndex)
    }

    /// All square indices in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = SquareIndex> {
        (1..=self.total_squares()).map(SquareIndex)
    }

    /// Check that `side` lies in `[1, total_sides]`.
    pub fn check_side(&self, side: SideIndex) -> Result<SideIndex, IndexError> {
        if bands::in_one_based_range(side.0, self.total_sides()) {
            Ok(side)
        } else {
            Err(IndexError::OutOfRange {
                kind: IndexKind::Side,
                index: side.0,
                max: self.total_sides(),
            })
        }
    }

    /// Check that `square` lies in `[1, total_squares]`.
    pub fn check_square(&self, square: SquareIndex) -> Result<SquareIndex, IndexError> {
        if bands::in_one_based_range(square.0, self.total_squares()) {
            Ok(square)
        } else {
            Err(IndexError::OutOfRange {
                kind: IndexKind::Square,
                index: square.0,
                max: self.total_squares(),
            })
        }
    }

    // ── Squares ─────────────────────────────────────────────────

    /// Row-major `(row, col)` of a square.
    ///
    /// Returns `Err(IndexError::OutOfRange)` if `square` is not in
    /// `[1, N^2]`. Multiples of `N` land in column `N` of their own row.
    pub fn square_position(&self, square: SquareIndex) -> Result<Position, IndexError> {
        let index = self.check_square(square)?.0;
        let row = (index - 1) / self.size + 1;
        let col = index - (row - 1) * self.size;
        Ok(Position::new(row, col))
    }

    /// Row-major square index of `position`: `(row - 1) * N + col`.
    ///
    /// Unchecked. A position outside the grid yields an index outside
    /// `[1, N^2]` (row 0 wraps to a huge value); callers that cannot
    /// guarantee a legal position should use
    /// [`checked_square_index`](Self::checked_square_index).
    pub fn square_index(&self, position: Position) -> SquareIndex {
        SquareIndex(
            position
                .row
                .wrapping_sub(1)
                .wrapping_mul(self.size)
                .wrapping_add(position.col),
        )
    }

    /// Square index of `position`, or `None` if it lies outside the grid.
    pub fn checked_square_index(&self, position: Position) -> Option<SquareIndex> {
        let inside = bands::in_one_based_range(position.row, self.size)
            && bands::in_one_based_range(position.col, self.size);
        inside.then(|| self.square_index(position))
    }

    // ── Sides ───────────────────────────────────────────────────

    /// Anchor dot of `side` when read as `orientation`.
    ///
    /// Returns `None` if the side belongs to the other orientation or lies
    /// outside `[1, total_sides]`. Vertical anchors have `row` in
    /// `1..=N+1` (the final band maps onto dot row `N + 1`); horizontal
    /// anchors have `col` in `1..=N+1`.
    pub fn side_position(&self, side: SideIndex, orientation: Orientation) -> Option<Position> {
        let side = self.check_side(side).ok()?;
        let (band, residual) = bands::decompose(side.0, self.band_width());
        match orientation {
            Orientation::Vertical => {
                (residual < self.size).then(|| Position::new(band + 1, residual + 1))
            }
            Orientation::Horizontal => (residual >= self.size && band < self.size)
                .then(|| Position::new(band + 1, residual - self.size + 1)),
        }
    }

    /// Fold a horizontal anchor in the last dot column onto column `N`.
    ///
    /// A horizontal side at dot column `N + 1` has no square to its right;
    /// it belongs to the square on its left. Vertical positions are
    /// returned unchanged.
    pub fn normalize_position(&self, position: Position, orientation: Orientation) -> Position {
        match orientation {
            Orientation::Horizontal if position.col == self.dots_per_side() => {
                Position::new(position.row, self.size)
            }
            _ => position,
        }
    }

    /// [`side_position`](Self::side_position) followed by
    /// [`normalize_position`](Self::normalize_position).
    pub fn side_normalized_position(
        &self,
        side: SideIndex,
        orientation: Orientation,
    ) -> Option<Position> {
        self.side_position(side, orientation)
            .map(|position| self.normalize_position(position, orientation))
    }

    /// Resolve the orientation and anchor dot of `side`.
    ///
    /// Vertical is tried first. Returns `Err(IndexError::OutOfRange)` if
    /// `side` is not in `[1, total_sides]`.
    pub fn side_anchor(&self, side: SideIndex) -> Result<SideAnchor, IndexError> {
        let side = self.check_side(side)?;
        let first = Orientation::Vertical;
        [first, first.flipped()]
            .into_iter()
            .find_map(|orientation| {
                self.side_position(side, orientation)
                    .map(|position| SideAnchor {
                        orientation,
                        position,
                    })
            })
            .ok_or(IndexError::OutOfRange {
                kind: IndexKind::Side,
                index: side.0,
                max: self.total_sides(),
            })
    }

    /// Side index of an anchor, or `None` if the anchor is not a side of
    /// this lattice.
    pub fn side_index(&self, anchor: SideAnchor) -> Option<SideIndex> {
        let Position { row, col } = anchor.position;
        let width = self.band_width();
        match anchor.orientation {
            Orientation::Vertical => {
                let valid = bands::in_one_based_range(row, self.dots_per_side())
                    && bands::in_one_based_range(col, self.size);
                valid.then(|| SideIndex(bands::compose(row - 1, col - 1, width)))
            }
            Orientation::Horizontal => {
                let valid = bands::in_one_based_range(row, self.size)
                    && bands::in_one_based_range(col, self.dots_per_side());
                valid.then(|| SideIndex(bands::compose(row - 1, self.size + col - 1, width)))
            }
        }
    }
}
