use std::fmt;

use super::{Board, Square};

/// One row of text per rank, highest rank first, three columns per square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.height).rev() {
            for file in 0..self.width {
                write!(f, " {} ", self.occupant(Square(file, rank)).symbol())?;
            }
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardBuilder, Pawn, Square, BLACK, WHITE};

    #[test]
    fn test_empty_board_renders_blank_rows() {
        let text = Board::empty().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|row| row.chars().count() == 24));
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_standard_board_rows() {
        let text = Board::new().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[1], " ♟ ".repeat(8));
        assert_eq!(rows[6], " ♙ ".repeat(8));
        assert_eq!(rows[0].trim(), "");
    }

    #[test]
    fn test_small_board() {
        let board = BoardBuilder::new()
            .dimensions(2, 2)
            .piece(Square(0, 0), WHITE.piece(Pawn))
            .piece(Square(1, 1), BLACK.piece(Pawn))
            .build()
            .unwrap();
        assert_eq!(board.to_string(), "    ♟ \n ♙    ");
    }
}
