//! A shared, replaceable "current board".
//!
//! Boards themselves are immutable and can be read from any thread. What
//! needs coordinating is which board is the current one when several
//! callers derive new boards from the same snapshot.

use parking_lot::RwLock;

use crate::board::{Board, BoardError, Square};

/// The canonical board of a game, shared between threads.
#[derive(Debug, Default)]
pub struct SharedBoard(RwLock<Board>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(RwLock::new(board))
    }

    /// A copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.0.read().clone()
    }

    /// Make a move on the current board and publish the result.
    ///
    /// Validation and publication happen under one write lock, so two
    /// racing callers never both move from the same position.
    ///
    /// # Errors
    /// Whatever [`Board::make_move`] returns; the current board is left
    /// unchanged.
    pub fn make_move(&self, start: Square, end: Square) -> Result<Board, BoardError> {
        let mut current = self.0.write();
        let next = current.make_move(start, end)?;
        *current = next.clone();
        Ok(next)
    }

    /// Replace the current board with `next` if it is still `base`.
    ///
    /// # Errors
    /// The board that is current instead of `base`.
    pub fn publish(&self, base: &Board, next: Board) -> Result<(), Board> {
        let mut current = self.0.write();
        if *current != *base {
            return Err(current.clone());
        }
        *current = next;
        Ok(())
    }

    /// Take the current board out, leaving nothing shared.
    #[must_use]
    pub fn into_inner(self) -> Board {
        self.0.into_inner()
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_make_move_publishes() {
        let shared = SharedBoard::new(Board::new());
        let moved = shared.make_move(Square(4, 1), Square(4, 2)).unwrap();
        assert_eq!(shared.snapshot(), moved);
    }

    #[test]
    fn test_illegal_move_leaves_board() {
        let shared = SharedBoard::new(Board::new());
        let err = shared.make_move(Square(4, 1), Square(4, 3)).unwrap_err();
        assert!(matches!(err, BoardError::IllegalMove(_)));
        assert_eq!(shared.into_inner(), Board::new());
    }

    #[test]
    fn test_publish_rejects_stale_base() {
        let shared = SharedBoard::new(Board::new());
        let base = shared.snapshot();
        let first = base.make_move(Square(0, 1), Square(0, 2)).unwrap();
        let second = base.make_move(Square(1, 1), Square(1, 2)).unwrap();

        assert!(shared.publish(&base, first.clone()).is_ok());
        assert_eq!(shared.publish(&base, second), Err(first));
    }

    #[test]
    fn test_concurrent_moves_are_serialized() {
        let shared = Arc::new(SharedBoard::new(Board::new()));
        let handles: Vec<_> = (0..8)
            .map(|file| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.make_move(Square(file, 1), Square(file, 2)).is_ok())
            })
            .collect();
        let succeeded = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(succeeded, 8);
        let board = shared.snapshot();
        assert!((0..8).all(|file| !board.get(Square(file, 2)).unwrap().is_empty()));
        assert_eq!(board.turn_of(), &crate::board::WHITE);
    }
}
