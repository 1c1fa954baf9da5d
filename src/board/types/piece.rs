//! The piece capability contract and the built-in piece variants.

use std::any::Any;
use std::fmt;

use super::{OwnedPiece, Player, Side, Square, SquareSet};

/// Movement rules for a kind of piece.
///
/// Both queries are pure functions of the piece, the starting square and
/// the side that owns the piece. They describe destinations as if the
/// board were unbounded and empty; the board is responsible for clipping
/// and occupancy.
///
/// Squares are absolute board coordinates. Pieces with a sense of
/// direction use [`Side::forward`] to find it; others can ignore `side`.
pub trait Piece: fmt::Debug + Send + Sync + 'static {
    /// Squares this piece can move to, regardless of occupation or board.
    fn reachable_from(&self, square: Square, side: Side) -> SquareSet;

    /// Squares this piece can capture on, regardless of occupation or board.
    fn capturable_from(&self, square: Square, side: Side) -> SquareSet;

    /// Character used when rendering this piece for the given side.
    fn symbol(&self, _side: Side) -> char {
        '?'
    }
}

/// Object-safe equality over piece variants.
pub(crate) trait DynPiece: Piece {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DynPiece) -> bool;
}

impl<T: Piece + PartialEq> DynPiece for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynPiece) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A pawn: moves one square forward, captures one square diagonally forward.
///
/// Forward is towards higher ranks for White and lower ranks for Black.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pawn;

impl Piece for Pawn {
    fn reachable_from(&self, square: Square, side: Side) -> SquareSet {
        SquareSet::from([square.offset(0, side.forward())])
    }

    fn capturable_from(&self, square: Square, side: Side) -> SquareSet {
        let forward = side.forward();
        SquareSet::from([square.offset(1, forward), square.offset(-1, forward)])
    }

    fn symbol(&self, side: Side) -> char {
        match side {
            Side::White => '♙',
            Side::Black => '♟',
        }
    }
}

/// The contents of an unoccupied square.
///
/// It goes nowhere and captures nothing, but answers the same queries as
/// any other piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Empty;

impl Piece for Empty {
    fn reachable_from(&self, _square: Square, _side: Side) -> SquareSet {
        SquareSet::new()
    }

    fn capturable_from(&self, _square: Square, _side: Side) -> SquareSet {
        SquareSet::new()
    }

    fn symbol(&self, _side: Side) -> char {
        ' '
    }
}

/// The kinds of piece that can be placed on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PieceKind {
    Pawn,
}

impl PieceKind {
    /// A fresh piece of this kind owned by `player`.
    #[must_use]
    pub fn owned_by(self, player: &Player) -> OwnedPiece {
        match self {
            PieceKind::Pawn => player.piece(Pawn),
        }
    }
}

/// Every placeable built-in piece kind.
pub const PIECES: [PieceKind; 1] = [PieceKind::Pawn];
