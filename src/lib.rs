//! A persistent board and move-legality engine for chess-like games.
//!
//! Boards are immutable values; moving a piece returns a new board. The
//! rules for each kind of piece live behind the [`board::Piece`] trait, so
//! new pieces can be added without touching the board.

pub mod board;
pub mod fixtures;
pub mod sync;

pub use board::{Board, BoardError, Occupant, OwnedPiece, Piece, Player, Square};
pub use sync::SharedBoard;
