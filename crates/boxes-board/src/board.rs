//! The board: side and square state plus the move applier.

use boxes_core::{Player, SideIndex, SquareIndex};
use boxes_lattice::{Lattice, SideSquares};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::square::Square;

/// What a successful [`Board::draw_side_outcome`] changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The side that was drawn.
    pub side: SideIndex,
    /// The player who drew it.
    pub player: Player,
    /// Squares whose border count was incremented, ascending.
    pub touched: SideSquares,
    /// Subset of `touched` completed (and claimed by `player`) by this side.
    pub claimed: SmallVec<[SquareIndex; 2]>,
}

/// State of one dots-and-boxes board.
///
/// Owns the drawn flag of every side and the border count and owner of
/// every square. Storage is allocated once from the [`BoardConfig`] and
/// never resized; sides are only ever drawn, never erased, and claimed
/// squares never change hands.
///
/// All mutation goes through [`draw_side`](Self::draw_side), which takes
/// `&mut self`: the drawn-check, the mark, and the border increments on
/// up to two squares happen as one update.
///
/// # Examples
///
/// ```
/// use boxes_board::Board;
/// use boxes_core::{Owner, Player, SideIndex, SquareIndex};
///
/// let mut board = Board::with_size(5).unwrap();
/// for side in [1, 6, 7, 12] {
///     board.draw_side(SideIndex(side), Player::X).unwrap();
/// }
/// assert_eq!(board.square(SquareIndex(1)).unwrap().owner(), Owner::Claimed(Player::X));
///
/// // Drawing a side twice is rejected without touching the board.
/// assert_eq!(board.draw_side(SideIndex(7), Player::O).unwrap(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    lattice: Lattice,
    squares: Vec<Square>,
    sides: Vec<bool>,
}

impl Board {
    /// Build an empty board: no sides drawn, every square unclaimed.
    ///
    /// Returns `Err(BoardError::Config)` if the config fails validation.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let lattice = config.lattice()?;
        let squares = lattice.squares().map(Square::new).collect();
        let sides = vec![false; lattice.total_sides() as usize];
        debug!(
            size = lattice.size(),
            squares = lattice.total_squares(),
            sides = lattice.total_sides(),
            "board created"
        );
        Ok(Self {
            config,
            lattice,
            squares,
            sides,
        })
    }

    /// Shorthand for `Board::new(BoardConfig::new(size))`.
    pub fn with_size(size: u32) -> Result<Self, BoardError> {
        Self::new(BoardConfig::new(size))
    }

    /// The configuration this board was built from.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The board's lattice geometry.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Drawn flags for every side, indexed by `SideIndex::offset`.
    pub fn sides(&self) -> &[bool] {
        &self.sides
    }

    /// Every square, indexed by `SquareIndex::offset`.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns `true` if `side` has been drawn.
    pub fn is_drawn(&self, side: SideIndex) -> Result<bool, BoardError> {
        let side = self.lattice.check_side(side)?;
        Ok(self.sides[side.offset()])
    }

    /// Look up one square.
    pub fn square(&self, index: SquareIndex) -> Result<&Square, BoardError> {
        let index = self.lattice.check_square(index)?;
        Ok(&self.squares[index.offset()])
    }

    /// Number of sides drawn so far.
    pub fn drawn_count(&self) -> usize {
        self.sides.iter().filter(|&&drawn| drawn).count()
    }

    /// Number of squares owned by `player`.
    pub fn claimed_count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|sq| sq.owner().player() == Some(player))
            .count()
    }

    /// Returns `true` once every side is drawn.
    pub fn is_complete(&self) -> bool {
        self.sides.iter().all(|&drawn| drawn)
    }

    /// Draw `side` for `player`.
    ///
    /// Returns `Ok(Some(n))` with the number of squares the side borders
    /// (1 or 2), or `Ok(None)` if the side was already drawn, in which case
    /// the board is unchanged. Returns `Err(BoardError::Index)` if `side`
    /// is not a side of this board.
    pub fn draw_side(&mut self, side: SideIndex, player: Player) -> Result<Option<u8>, BoardError> {
        Ok(self
            .draw_side_outcome(side, player)?
            .map(|outcome| outcome.touched.len() as u8))
    }

    /// Like [`draw_side`](Self::draw_side), reporting which squares were
    /// touched and which were claimed.
    pub fn draw_side_outcome(
        &mut self,
        side: SideIndex,
        player: Player,
    ) -> Result<Option<DrawOutcome>, BoardError> {
        let side = self.lattice.check_side(side)?;
        if self.sides[side.offset()] {
            debug!(side = side.0, %player, "side already drawn, move rejected");
            return Ok(None);
        }
        let touched = self.lattice.squares_for_side(side)?;

        self.sides[side.offset()] = true;
        let mut claimed = SmallVec::new();
        for &index in &touched {
            if self.squares[index.offset()].add_border(player) {
                debug!(square = index.0, %player, "square claimed");
                claimed.push(index);
            }
        }
        trace!(
            side = side.0,
            %player,
            touched = touched.len(),
            claimed = claimed.len(),
            "side drawn"
        );
        Ok(Some(DrawOutcome {
            side,
            player,
            touched,
            claimed,
        }))
    }
}
