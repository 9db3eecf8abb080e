//! Side-to-square and square-to-side adjacency.

use crate::lattice::Lattice;
use boxes_core::{IndexError, Orientation, Position, SideIndex, SquareIndex};
use smallvec::SmallVec;

/// Squares bordered by a single side: one on the outer boundary, two inside.
pub type SideSquares = SmallVec<[SquareIndex; 2]>;

impl Lattice {
    /// The squares `side` borders, in ascending order.
    ///
    /// A vertical side borders the square below its anchor (absent on the
    /// last dot row) and the square above it (absent on the first). A
    /// horizontal side borders the square to the right of its anchor
    /// (absent in the last dot column) and the square to the left (absent
    /// in the first).
    ///
    /// Returns `Err(IndexError::OutOfRange)` if `side` is not in
    /// `[1, total_sides]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxes_core::{SideIndex, SquareIndex};
    /// use boxes_lattice::Lattice;
    ///
    /// let lattice = Lattice::new(5).unwrap();
    /// // Top edge of the grid: one square.
    /// assert_eq!(lattice.squares_for_side(SideIndex(1)).unwrap().as_slice(), &[SquareIndex(1)]);
    /// // Between squares 1 and 2.
    /// assert_eq!(
    ///     lattice.squares_for_side(SideIndex(7)).unwrap().as_slice(),
    ///     &[SquareIndex(1), SquareIndex(2)]
    /// );
    /// ```
    pub fn squares_for_side(&self, side: SideIndex) -> Result<SideSquares, IndexError> {
        let anchor = self.side_anchor(side)?;
        let Position { row, col } = anchor.position;
        let n = self.size();
        let mut squares = SideSquares::new();
        match anchor.orientation {
            Orientation::Vertical => {
                if row >= 2 {
                    squares.push(self.square_index(Position::new(row - 1, col)));
                }
                if row <= n {
                    squares.push(self.square_index(Position::new(row, col)));
                }
            }
            Orientation::Horizontal => {
                if col >= 2 {
                    squares.push(self.square_index(Position::new(row, col - 1)));
                }
                if col <= n {
                    squares.push(self.square_index(Position::new(row, col)));
                }
            }
        }
        Ok(squares)
    }

    /// The four sides bounding `square`, as `[top, right, bottom, left]`.
    ///
    /// Returns `Err(IndexError::OutOfRange)` if `square` is not in
    /// `[1, N^2]`.
    pub fn sides_for_square(&self, square: SquareIndex) -> Result<[SideIndex; 4], IndexError> {
        let Position { row, col } = self.square_position(square)?;
        let width = self.band_width();
        let top = (row - 1) * width + col;
        let bottom = row * width + col;
        let left = top + self.size();
        let right = left + 1;
        Ok([
            SideIndex(top),
            SideIndex(right),
            SideIndex(bottom),
            SideIndex(left),
        ])
    }

    /// Returns `true` if `side` lies on the outer edge of the grid.
    pub fn is_boundary_side(&self, side: SideIndex) -> Result<bool, IndexError> {
        Ok(self.squares_for_side(side)?.len() == 1)
    }
}
