//! Per-square border count and ownership.

use boxes_core::{Owner, Player, SquareIndex};

/// One unit square of the board.
///
/// A square moves `Unclaimed(0..=3 borders) -> Claimed(4 borders, player)`
/// and never leaves the claimed state. The owner is claimed iff
/// `border_count == 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Square {
    index: SquareIndex,
    border_count: u8,
    owner: Owner,
}

impl Square {
    /// Number of sides bounding a square.
    pub const BORDERS: u8 = 4;

    /// An unclaimed square with no drawn borders.
    pub fn new(index: SquareIndex) -> Self {
        Self {
            index,
            border_count: 0,
            owner: Owner::Unclaimed,
        }
    }

    /// This square's index.
    pub fn index(&self) -> SquareIndex {
        self.index
    }

    /// Drawn borders, `0..=4`.
    pub fn border_count(&self) -> u8 {
        self.border_count
    }

    /// Current owner.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Returns `true` once all four borders are drawn.
    pub fn is_claimed(&self) -> bool {
        self.owner.is_claimed()
    }

    /// Record one more drawn border on behalf of `player`.
    ///
    /// Returns `true` if this border completed the square and `player`
    /// claimed it. A claimed square is left untouched.
    pub(crate) fn add_border(&mut self, player: Player) -> bool {
        if self.is_claimed() {
            return false;
        }
        self.border_count += 1;
        if self.border_count == Self::BORDERS {
            self.owner = Owner::Claimed(player);
            return true;
        }
        false
    }
}
