//! Board representation and move legality.
//!
//! A [`Board`] is an immutable snapshot: a mapping from squares to pieces,
//! its dimensions, and the order in which players move. Every transition
//! returns a new board and leaves the old one untouched.
//!
//! Pieces describe where they could go on an empty, unbounded grid
//! through the [`Piece`] trait. The board clips those squares to its
//! bounds and drops any held by the mover's own pieces.
//!
//! # Example
//! ```
//! use grim::board::{parse_algebraic, Board};
//!
//! let board = Board::new();
//! let e2 = parse_algebraic("e2").unwrap();
//! let e3 = parse_algebraic("e3").unwrap();
//! assert!(board.movable_from(e2).unwrap().contains(&e3));
//!
//! let moved = board.make_move(e2, e3).unwrap();
//! assert_eq!(moved.turn_of().name(), "black");
//! ```

mod builder;
mod error;
pub mod prelude;
mod region;
mod render;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, IllegalMove, SquareError};
pub use region::{in_bounds, rectangle, rectangle_from_origin, Rectangle};
pub use state::Board;
pub use types::{
    parse_algebraic, Empty, Occupant, OwnedPiece, Pawn, Piece, PieceKind, Player, Side, Square,
    SquareSet, BLACK, PIECES, WHITE,
};
