//! Rectangular regions of squares and bounds checks.

use std::iter::FusedIterator;

use super::Square;

/// Returns true if `square` lies within a `width` by `height` grid anchored at the origin.
#[inline]
#[must_use]
pub fn in_bounds(square: Square, width: i32, height: i32) -> bool {
    (0..width).contains(&square.file()) && (0..height).contains(&square.rank())
}

/// Every square in the rectangle spanned by two corners, inclusive of both.
///
/// Squares are produced file by file, and rank by rank within a file.
/// The corners may be given in either order.
#[must_use]
pub fn rectangle(a: Square, b: Square) -> Rectangle {
    Rectangle::new(a, b)
}

/// The rectangle spanned by the origin and `corner`.
#[must_use]
pub fn rectangle_from_origin(corner: Square) -> Rectangle {
    Rectangle::new(Square::ORIGIN, corner)
}

/// Iterator over the squares of an axis-aligned rectangle.
#[derive(Clone, Debug)]
pub struct Rectangle {
    min_rank: i32,
    max_file: i32,
    max_rank: i32,
    next: Option<Square>,
}

impl Rectangle {
    fn new(a: Square, b: Square) -> Self {
        let (min_file, max_file) = (a.file().min(b.file()), a.file().max(b.file()));
        let (min_rank, max_rank) = (a.rank().min(b.rank()), a.rank().max(b.rank()));
        Rectangle {
            min_rank,
            max_file,
            max_rank,
            next: Some(Square(min_file, min_rank)),
        }
    }

    /// Squares left to yield, saturating at `usize::MAX` for spans too
    /// large to count.
    fn remaining(&self) -> usize {
        let Some(Square(file, rank)) = self.next else {
            return 0;
        };
        let span = |low: i32, high: i32| u128::from(high.abs_diff(low)) + 1;
        let height = span(self.min_rank, self.max_rank);
        let full_files = span(file, self.max_file) - 1;
        let total = full_files * height + span(rank, self.max_rank);
        usize::try_from(total).unwrap_or(usize::MAX)
    }
}

impl Iterator for Rectangle {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = if current.rank() < self.max_rank {
            Some(current.offset(0, 1))
        } else if current.file() < self.max_file {
            Some(Square(current.file() + 1, self.min_rank))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rectangle {}

impl FusedIterator for Rectangle {}
