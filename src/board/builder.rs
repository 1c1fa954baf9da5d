//! Fluent builder for boards with non-default dimensions or players.
//!
//! # Example
//! ```
//! use grim::board::{BoardBuilder, Pawn, Square, BLACK, WHITE};
//!
//! let board = BoardBuilder::new()
//!     .dimensions(5, 6)
//!     .piece(Square(0, 1), WHITE.piece(Pawn))
//!     .piece(Square(4, 4), BLACK.piece(Pawn))
//!     .players([BLACK, WHITE])
//!     .build()
//!     .unwrap();
//! assert_eq!(board.turn_of(), &BLACK);
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use super::error::BoardError;
use super::region::in_bounds;
use super::state::{standard_pieces, standard_players, Pieces, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::{Board, OwnedPiece, Player, Square};

/// A fluent builder for constructing `Board` values.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Pieces,
    players: VecDeque<Player>,
    width: i32,
    height: i32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty 8x8 board with White to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Arc::new(BTreeMap::new()),
            players: standard_players(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Create a builder starting from the standard opening layout.
    #[must_use]
    pub fn standard_layout() -> Self {
        BoardBuilder {
            pieces: standard_pieces(),
            ..Self::new()
        }
    }

    /// Set the number of files and ranks.
    #[must_use]
    pub const fn dimensions(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the turn order; the first player moves first.
    #[must_use]
    pub fn players<I>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = Player>,
    {
        self.players = players.into_iter().collect();
        self
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: OwnedPiece) -> Self {
        Arc::make_mut(&mut self.pieces).insert(square, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        Arc::make_mut(&mut self.pieces).remove(&square);
        self
    }

    /// Build the board.
    ///
    /// # Errors
    /// `InvalidDimensions` for a negative width or height, `NoPlayers` for
    /// an empty turn order, and `NoSuchSquare` for a piece placed outside
    /// the dimensions.
    pub fn build(self) -> Result<Board, BoardError> {
        if self.width < 0 || self.height < 0 {
            return Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.players.is_empty() {
            return Err(BoardError::NoPlayers);
        }
        if let Some(&square) = self
            .pieces
            .keys()
            .find(|square| !in_bounds(**square, self.width, self.height))
        {
            return Err(BoardError::NoSuchSquare { square });
        }

        Ok(Board {
            pieces: self.pieces,
            players: self.players,
            width: self.width,
            height: self.height,
        })
    }
}
