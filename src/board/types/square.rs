//! Square types and algebraic notation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// An unordered collection of destination squares.
///
/// Backed by a `BTreeSet` so iteration is deterministic.
pub type SquareSet = BTreeSet<Square>;

/// A square on the board, represented as (file, rank).
///
/// Coordinates are signed so that pieces can describe destinations that
/// fall off the edge of a board; the board clips those away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i32, pub i32); // (file, rank)

impl Square {
    /// The bottom-left corner, `a1`.
    pub const ORIGIN: Square = Square(0, 0);

    /// Get the file (0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i32 {
        self.0
    }

    /// Get the rank (0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i32 {
        self.1
    }

    /// The square shifted by the given file and rank deltas.
    #[inline]
    #[must_use]
    pub const fn offset(self, files: i32, ranks: i32) -> Self {
        Square(self.0 + files, self.1 + ranks)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.0) && self.1 >= 0 {
            write!(f, "{}{}", (self.0 as u8 + b'a') as char, self.1 + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

/// Parse a square in algebraic notation, e.g. `c3` or `H9`.
///
/// Every leading letter adds its offset from `a` to the file, so `b` is
/// file 1 and `bb` is file 2. The remaining digits are the 1-based rank.
pub fn parse_algebraic(notation: &str) -> Result<Square, SquareError> {
    let split = notation
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| SquareError::MissingRank {
            notation: notation.to_string(),
        })?;
    let (letters, digits) = notation.split_at(split);

    let mut file = 0i32;
    for letter in letters.chars() {
        if !letter.is_ascii_alphabetic() {
            return Err(SquareError::InvalidNotation {
                notation: notation.to_string(),
            });
        }
        file += i32::from(letter.to_ascii_lowercase() as u8 - b'a');
    }

    let rank: i32 = digits.parse().map_err(|_| SquareError::InvalidNotation {
        notation: notation.to_string(),
    })?;

    Ok(Square(file, rank - 1))
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_algebraic(s)
    }
}
