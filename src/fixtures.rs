//! Random boards and moves for tests and benchmarks.
//!
//! Every generator takes the RNG explicitly so callers can seed it and
//! replay a failing case.
//!
//! # Example
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! use grim::board::Board;
//! use grim::fixtures;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let board = fixtures::random_board(&mut rng, &Board::empty(), 10);
//! if let Some(moved) = fixtures::moved_board(&mut rng, &board) {
//!     assert_ne!(moved.turn_of(), board.turn_of());
//! }
//! ```

use std::sync::Arc;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::board::{Board, OwnedPiece, Square, PIECES};

/// A square on `board`, or `None` if the board has no squares.
pub fn random_square<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Square> {
    if board.width() <= 0 || board.height() <= 0 {
        return None;
    }
    Some(Square(
        rng.gen_range(0..board.width()),
        rng.gen_range(0..board.height()),
    ))
}

/// A placeable piece owned by one of `board`'s players.
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> OwnedPiece {
    let kind = PIECES[rng.gen_range(0..PIECES.len())];
    let owner = board.players().choose(rng).unwrap_or(board.turn_of());
    kind.owned_by(owner)
}

/// `template` with up to `count` random pieces added to it.
///
/// Later pieces overwrite earlier ones on the same square, so the board
/// may end up with fewer than `count` new pieces.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, template: &Board, count: usize) -> Board {
    let mut board = template.clone();
    for _ in 0..count {
        let Some(square) = random_square(rng, template) else {
            break;
        };
        let piece = random_piece(rng, template);
        Arc::make_mut(&mut board.pieces).insert(square, piece);
    }
    board
}

/// A legal `(start, end)` pair on `board`, if any piece can move.
pub fn legal_move_on<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<(Square, Square)> {
    let (start, destinations) = board
        .pieces()
        .filter_map(|(start, _)| {
            let destinations = board.movable_from(start).ok()?;
            (!destinations.is_empty()).then_some((start, destinations))
        })
        .choose(rng)?;
    let end = destinations.into_iter().choose(rng)?;
    Some((start, end))
}

/// A board one legal move away from `board`.
pub fn moved_board<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Board> {
    let (start, end) = legal_move_on(rng, board)?;
    board.make_move(start, end).ok()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_random_square_is_on_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = BoardBuilder::new().dimensions(3, 5).build().unwrap();
        for _ in 0..200 {
            let square = random_square(&mut rng, &board).unwrap();
            assert!(board.contains(square));
        }
    }

    #[test]
    fn test_random_square_on_degenerate_board() {
        let mut rng = StdRng::seed_from_u64(2);
        let board = BoardBuilder::new().dimensions(0, 4).build().unwrap();
        assert_eq!(random_square(&mut rng, &board), None);
    }

    #[test]
    fn test_random_board_respects_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = random_board(&mut rng, &Board::empty(), 12);
        let placed = board.pieces().count();
        assert!(placed >= 1 && placed <= 12);
        assert!(board.pieces().all(|(square, _)| board.contains(square)));
    }

    #[test]
    fn test_legal_move_on_empty_board() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(legal_move_on(&mut rng, &Board::empty()), None);
        assert_eq!(moved_board(&mut rng, &Board::empty()), None);
    }

    #[test]
    fn test_moved_board_passes_turn() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = Board::new();
        let moved = moved_board(&mut rng, &board).unwrap();
        assert_ne!(moved.turn_of(), board.turn_of());
    }
}
