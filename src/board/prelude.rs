//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use grim::board::prelude::*;
//!
//! let board = Board::empty().set(Square(0, 0), WHITE.piece(Pawn)).unwrap();
//! assert_eq!(board.pieces().count(), 1);
//! ```

pub use super::{
    parse_algebraic, rectangle, Board, BoardBuilder, BoardError, Occupant, OwnedPiece, Pawn,
    Piece, Player, Side, Square, SquareSet, BLACK, WHITE,
};
