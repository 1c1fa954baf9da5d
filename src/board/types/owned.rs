//! Pieces paired with their owners, and what a square can hold.

use std::fmt;
use std::sync::Arc;

use super::piece::DynPiece;
use super::{Empty, Piece, Player, Side, Square, SquareSet};

/// A piece variant owned by a player.
///
/// Movement queries are forwarded unchanged to the variant, along with the
/// owner's side.
#[derive(Clone)]
pub struct OwnedPiece {
    piece: Arc<dyn DynPiece>,
    owner: Player,
}

impl OwnedPiece {
    #[must_use]
    pub fn new<P: Piece + PartialEq>(piece: P, owner: Player) -> Self {
        OwnedPiece {
            piece: Arc::new(piece),
            owner,
        }
    }

    #[inline]
    #[must_use]
    pub fn owner(&self) -> &Player {
        &self.owner
    }

    /// Returns true if the wrapped variant is a `P`.
    #[must_use]
    pub fn is<P: Piece>(&self) -> bool {
        self.piece.as_any().is::<P>()
    }

    #[must_use]
    pub fn downcast_ref<P: Piece>(&self) -> Option<&P> {
        self.piece.as_any().downcast_ref::<P>()
    }

    pub fn reachable_from(&self, square: Square) -> SquareSet {
        self.piece.reachable_from(square, self.owner.side())
    }

    pub fn capturable_from(&self, square: Square) -> SquareSet {
        self.piece.capturable_from(square, self.owner.side())
    }

    /// Whether `player` may capture this piece.
    #[inline]
    #[must_use]
    pub fn can_be_captured_by(&self, player: &Player) -> bool {
        *player != self.owner
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        self.piece.symbol(self.owner.side())
    }
}

impl PartialEq for OwnedPiece {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.piece.dyn_eq(&*other.piece)
    }
}

impl Eq for OwnedPiece {}

impl fmt::Debug for OwnedPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedPiece")
            .field("piece", &self.piece)
            .field("owner", &self.owner.name())
            .finish()
    }
}

/// Whatever is on a square: a piece, or nothing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(OwnedPiece),
}

impl Occupant {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }

    #[inline]
    #[must_use]
    pub fn piece(&self) -> Option<&OwnedPiece> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(piece) => Some(piece),
        }
    }

    #[must_use]
    pub fn into_piece(self) -> Option<OwnedPiece> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(piece) => Some(piece),
        }
    }

    pub fn reachable_from(&self, square: Square) -> SquareSet {
        match self {
            Occupant::Empty => Empty.reachable_from(square, Side::White),
            Occupant::Piece(piece) => piece.reachable_from(square),
        }
    }

    pub fn capturable_from(&self, square: Square) -> SquareSet {
        match self {
            Occupant::Empty => Empty.capturable_from(square, Side::White),
            Occupant::Piece(piece) => piece.capturable_from(square),
        }
    }

    /// Whether `player` may move onto this square.
    ///
    /// An empty square never blocks, so it is always "capturable".
    #[must_use]
    pub fn can_be_captured_by(&self, player: &Player) -> bool {
        match self {
            Occupant::Empty => true,
            Occupant::Piece(piece) => piece.can_be_captured_by(player),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Occupant::Empty => Empty.symbol(Side::White),
            Occupant::Piece(piece) => piece.symbol(),
        }
    }
}

impl From<OwnedPiece> for Occupant {
    fn from(piece: OwnedPiece) -> Self {
        Occupant::Piece(piece)
    }
}

impl From<Option<OwnedPiece>> for Occupant {
    fn from(piece: Option<OwnedPiece>) -> Self {
        piece.map_or(Occupant::Empty, Occupant::Piece)
    }
}
