//! Core board types.
//!
//! This module contains the value types the board is built from:
//! - `Square` and `SquareSet` - coordinates and destination sets
//! - `Piece`, `Pawn`, `Empty` - the piece capability contract and its variants
//! - `Player` and `Side` - who owns a piece and which way it faces
//! - `OwnedPiece` and `Occupant` - what a square holds

mod owned;
mod piece;
mod player;
mod square;

pub use owned::{Occupant, OwnedPiece};
pub use piece::{Empty, Pawn, Piece, PieceKind, PIECES};
pub use player::{Player, Side, BLACK, WHITE};
pub use square::{parse_algebraic, Square, SquareSet};
