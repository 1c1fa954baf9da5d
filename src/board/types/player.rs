//! Players and the sides they play.

use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{OwnedPiece, Piece};

/// Which end of the board a player starts from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Starts on the low ranks and advances towards higher ranks.
    White,
    /// Starts on the high ranks and advances towards lower ranks.
    Black,
}

impl Side {
    /// Both sides in turn order (White moves first)
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    /// Rank delta of one step "forward" for this side.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// A participant in the game.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Player {
    name: Cow<'static, str>,
    side: Side,
}

/// The player who moves first.
pub const WHITE: Player = Player::new_static("white", Side::White);
/// The player who moves second.
pub const BLACK: Player = Player::new_static("black", Side::Black);

impl Player {
    /// Create a player with an owned name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, side: Side) -> Self {
        Player {
            name: name.into(),
            side,
        }
    }

    const fn new_static(name: &'static str, side: Side) -> Self {
        Player {
            name: Cow::Borrowed(name),
            side,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Give this player ownership of a piece.
    #[must_use]
    pub fn piece<P: Piece + PartialEq>(&self, piece: P) -> OwnedPiece {
        OwnedPiece::new(piece, self.clone())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
