//! Players and square ownership.

use std::fmt;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Plays the `X` marker.
    X,
    /// Plays the `O` marker.
    O,
}

impl Player {
    /// Both players, in seating order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The printable marker for this player.
    pub fn marker(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Ownership state of a square.
///
/// A square starts [`Unclaimed`](Self::Unclaimed) and becomes
/// [`Claimed`](Self::Claimed) exactly once, when its fourth side is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Owner {
    /// No player has completed this square.
    #[default]
    Unclaimed,
    /// Completed by the given player. Terminal.
    Claimed(Player),
}

impl Owner {
    /// The owning player, if claimed.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Unclaimed => None,
            Self::Claimed(p) => Some(p),
        }
    }

    /// Returns `true` if a player owns the square.
    pub fn is_claimed(self) -> bool {
        matches!(self, Self::Claimed(_))
    }
}

impl From<Player> for Owner {
    fn from(p: Player) -> Self {
        Self::Claimed(p)
    }
}
