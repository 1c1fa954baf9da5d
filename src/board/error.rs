//! Error types for board operations.

use std::fmt;

use super::{Board, Occupant, Square};

/// Error type for algebraic notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Notation has no rank digits
    MissingRank { notation: String },
    /// Notation contains characters that are neither file letters nor rank digits
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::MissingRank { notation } => {
                write!(f, "Square notation '{notation}' has no rank")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A move that the piece on `start` cannot make on `board`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove {
    pub start: Square,
    pub end: Square,
    /// The board the move was attempted on.
    pub board: Board,
    /// Whatever was on `start`.
    pub piece: Occupant,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.piece {
            Occupant::Empty => write!(
                f,
                "Illegal move {} -> {}: no piece on {}",
                self.start, self.end, self.start
            ),
            Occupant::Piece(piece) => write!(
                f,
                "Illegal move {} -> {} for {:?} owned by {} ({} to move)",
                self.start,
                self.end,
                piece,
                piece.owner(),
                self.board.turn_of()
            ),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Error type for board queries and transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square lies outside the board's width and height
    NoSuchSquare { square: Square },
    /// Destination is not among the squares the piece can move to
    IllegalMove(Box<IllegalMove>),
    /// Board dimensions must not be negative
    InvalidDimensions { width: i32, height: i32 },
    /// Turn order needs at least one player
    NoPlayers,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NoSuchSquare { square } => {
                write!(f, "No such square {square} on this board")
            }
            BoardError::IllegalMove(illegal) => write!(f, "{illegal}"),
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board dimensions {width}x{height}")
            }
            BoardError::NoPlayers => write!(f, "Turn order has no players"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::IllegalMove(illegal) => Some(&**illegal),
            _ => None,
        }
    }
}

impl From<IllegalMove> for BoardError {
    fn from(illegal: IllegalMove) -> Self {
        BoardError::IllegalMove(Box::new(illegal))
    }
}
