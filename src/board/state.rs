use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::error::{BoardError, IllegalMove};
use super::region::in_bounds;
use super::{Occupant, OwnedPiece, Pawn, Player, Square, SquareSet, BLACK, WHITE};

pub(crate) const DEFAULT_WIDTH: i32 = 8;
pub(crate) const DEFAULT_HEIGHT: i32 = 8;

pub(crate) type Pieces = Arc<BTreeMap<Square, OwnedPiece>>;

/// Pawns on the second and seventh ranks of an 8x8 board.
static STANDARD: Lazy<Pieces> = Lazy::new(|| {
    let mut pieces = BTreeMap::new();
    for file in 0..DEFAULT_WIDTH {
        pieces.insert(Square(file, 1), WHITE.piece(Pawn));
        pieces.insert(Square(file, DEFAULT_HEIGHT - 2), BLACK.piece(Pawn));
    }
    Arc::new(pieces)
});

pub(crate) fn standard_pieces() -> Pieces {
    Arc::clone(&STANDARD)
}

pub(crate) fn standard_players() -> VecDeque<Player> {
    VecDeque::from([WHITE, BLACK])
}

/// An immutable board position.
///
/// Every transition returns a new `Board`. Cloning is cheap: the
/// occupancy map is shared until one of the copies is changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: Pieces,
    pub(crate) players: VecDeque<Player>,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening layout with White to move.
    #[must_use]
    pub fn new() -> Self {
        Board {
            pieces: standard_pieces(),
            ..Board::empty()
        }
    }

    /// An 8x8 board with no pieces and White to move.
    ///
    /// Use [`BoardBuilder`](super::BoardBuilder) for other dimensions or
    /// turn orders.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: Arc::new(BTreeMap::new()),
            players: standard_players(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Players in the order they are due to move.
    pub fn players(&self) -> impl ExactSizeIterator<Item = &Player> + '_ {
        self.players.iter()
    }

    /// The player whose turn it currently is.
    #[must_use]
    pub fn turn_of(&self) -> &Player {
        // Builders refuse empty turn orders and no transition removes players.
        &self.players[0]
    }

    /// Returns true if `square` is on this board.
    #[inline]
    #[must_use]
    pub fn contains(&self, square: Square) -> bool {
        in_bounds(square, self.width, self.height)
    }

    /// Every placed piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &OwnedPiece)> + '_ {
        self.pieces.iter().map(|(square, piece)| (*square, piece))
    }

    /// Whatever is on `square`.
    ///
    /// # Errors
    /// `NoSuchSquare` if `square` is off the board.
    pub fn get(&self, square: Square) -> Result<Occupant, BoardError> {
        self.check_bounds(square)?;
        Ok(self.occupant(square))
    }

    pub(crate) fn occupant(&self, square: Square) -> Occupant {
        self.pieces.get(&square).cloned().into()
    }

    /// Squares the piece on `square` can legally move or capture to.
    ///
    /// Destinations must be on the board and must not hold a piece that
    /// the player to move is unable to capture.
    ///
    /// # Errors
    /// `NoSuchSquare` if `square` is off the board.
    pub fn movable_from(&self, square: Square) -> Result<SquareSet, BoardError> {
        let occupant = self.get(square)?;
        Ok(self.destinations(square, &occupant))
    }

    fn destinations(&self, square: Square, occupant: &Occupant) -> SquareSet {
        let mover = self.turn_of();
        let mut destinations = occupant.reachable_from(square);
        destinations.extend(occupant.capturable_from(square));
        destinations.retain(|&end| {
            self.contains(end) && self.occupant(end).can_be_captured_by(mover)
        });
        destinations
    }

    /// Put `occupant` on `square`, regardless of legality.
    ///
    /// Setting `Occupant::Empty` clears the square. The turn order is not
    /// affected.
    ///
    /// # Errors
    /// `NoSuchSquare` if `square` is off the board.
    pub fn set(
        &self,
        square: Square,
        occupant: impl Into<Occupant>,
    ) -> Result<Board, BoardError> {
        self.check_bounds(square)?;
        let occupant = occupant.into();

        #[cfg(feature = "logging")]
        log::trace!("set {square} to {:?}", occupant);

        let mut pieces = Arc::clone(&self.pieces);
        match occupant {
            Occupant::Empty => {
                Arc::make_mut(&mut pieces).remove(&square);
            }
            Occupant::Piece(piece) => {
                Arc::make_mut(&mut pieces).insert(square, piece);
            }
        }
        Ok(Board {
            pieces,
            ..self.clone()
        })
    }

    /// Move the piece on `start` to `end`, capturing whatever is there.
    ///
    /// The returned board has the turn passed to the next player.
    ///
    /// # Errors
    /// `NoSuchSquare` if `start` is off the board, and `IllegalMove` if
    /// `end` is not one of [`movable_from(start)`](Self::movable_from).
    pub fn make_move(&self, start: Square, end: Square) -> Result<Board, BoardError> {
        let occupant = self.get(start)?;
        if !self.destinations(start, &occupant).contains(&end) {
            #[cfg(feature = "logging")]
            log::debug!(
                "rejected {start} -> {end} for {:?} ({} to move)",
                occupant,
                self.turn_of()
            );
            return Err(IllegalMove {
                start,
                end,
                board: self.clone(),
                piece: occupant,
            }
            .into());
        }

        #[cfg(feature = "logging")]
        log::trace!("{} moves {start} -> {end}", self.turn_of());

        let mut pieces = Arc::clone(&self.pieces);
        let map = Arc::make_mut(&mut pieces);
        if let Some(piece) = map.remove(&start) {
            map.insert(end, piece);
        }

        let mut players = self.players.clone();
        players.rotate_left(1);

        Ok(Board {
            pieces,
            players,
            width: self.width,
            height: self.height,
        })
    }

    /// A board holding only the given squares, shifted so the lowest file
    /// and rank among them become zero.
    ///
    /// The new board is `width - leftmost` files wide and
    /// `height - bottommost - 1` ranks high. Pieces that land outside those
    /// bounds are left out. The turn order is kept.
    pub fn subboard<I>(&self, squares: I) -> Board
    where
        I: IntoIterator<Item = Square>,
    {
        let mut leftmost = self.width;
        let mut bottommost = self.height;
        let mut present = Vec::new();
        for square in squares {
            leftmost = leftmost.min(square.file());
            bottommost = bottommost.min(square.rank());
            if let Some(piece) = self.pieces.get(&square) {
                present.push((square, piece.clone()));
            }
        }

        // Squares may lie anywhere in i32 space; a shift that overflows is
        // off the new board anyway.
        let width = self.width.saturating_sub(leftmost).max(0);
        let height = self.height.saturating_sub(bottommost).saturating_sub(1).max(0);
        let pieces = present
            .into_iter()
            .filter_map(|(square, piece)| {
                let file = square.file().checked_sub(leftmost)?;
                let rank = square.rank().checked_sub(bottommost)?;
                Some((Square(file, rank), piece))
            })
            .filter(|(square, _)| in_bounds(*square, width, height))
            .collect();

        Board {
            pieces: Arc::new(pieces),
            players: self.players.clone(),
            width,
            height,
        }
    }

    fn check_bounds(&self, square: Square) -> Result<(), BoardError> {
        if self.contains(square) {
            Ok(())
        } else {
            Err(BoardError::NoSuchSquare { square })
        }
    }
}
