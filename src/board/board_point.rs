//! Square coordinates and direction offsets.
//!
//! A `BoardPoint` can hold any integer pair. Whether it names a real square is a
//! question for the board it is used with, so rays can step past the edge
//! and be rejected by the board's bounds check.

use std::fmt;

/// A square address `(x, y)`, 0-indexed from the bottom-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardPoint {
    pub x: i32,
    pub y: i32,
}

impl BoardPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for BoardPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for BoardPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An immutable direction offset used to walk from one square to the next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i32,
    pub dy: i32,
}

impl Vector {
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The square one step from `start` along this direction. May be off the board.
    ///
    /// `None` when the step leaves the `i32` coordinate range.
    #[inline]
    pub const fn locate_from(self, start: BoardPoint) -> Option<BoardPoint> {
        match (start.x.checked_add(self.dx), start.y.checked_add(self.dy)) {
            (Some(x), Some(y)) => Some(BoardPoint::new(x, y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardPoint, Vector};

    #[test]
    fn vector_steps_to_adjacent_square() {
        let start = BoardPoint::new(3, 3);
        assert_eq!(Vector::new(1, 0).locate_from(start), Some(BoardPoint::new(4, 3)));
        assert_eq!(Vector::new(-2, 1).locate_from(start), Some(BoardPoint::new(1, 4)));
    }

    #[test]
    fn vector_can_step_off_the_grid() {
        let corner = BoardPoint::new(0, 0);
        assert_eq!(Vector::new(-1, -1).locate_from(corner), Some(BoardPoint::new(-1, -1)));
    }

    #[test]
    fn vector_step_past_the_integer_range_is_none() {
        let start = BoardPoint::new(1, 0);
        assert_eq!(Vector::new(i32::MAX, 0).locate_from(start), None);
        assert_eq!(Vector::new(0, i32::MIN).locate_from(BoardPoint::new(0, -1)), None);
        assert_eq!(
            Vector::new(i32::MAX - 1, 0).locate_from(start),
            Some(BoardPoint::new(i32::MAX, 0))
        );
    }
}
