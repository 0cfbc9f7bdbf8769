//! Board coordinates, sides and the four lines through a cell.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A board cell as (column, row).
/// Components are signed so candidate destinations can be computed
/// before they are bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({}, {})", x, y)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position reached after `n` steps of `(dx, dy)`.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32), n: i32) -> Self {
        Self::new(self.x + dx * n, self.y + dy * n)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the two competing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Side {
    /// Starts on the top and bottom rows.
    #[display("A")]
    A,
    /// Starts on the left and right columns.
    #[display("B")]
    B,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// The full row, column or diagonal through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Line {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Line {
    pub const ALL: [Line; 4] = [
        Line::Horizontal,
        Line::Vertical,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Unit step along the line. The opposite direction is the negated step.
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Line::Horizontal => (1, 0),
            Line::Vertical => (0, 1),
            Line::Diagonal => (1, 1),
            Line::AntiDiagonal => (1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_both_directions() {
        let p = Position::new(3, 4);
        assert_eq!(p.offset(Line::AntiDiagonal.step(), 2), Position::new(5, 2));
        assert_eq!(p.offset(Line::AntiDiagonal.step(), -2), Position::new(1, 6));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent().opponent(), Side::B);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 7).to_string(), "(1, 7)");
        assert_eq!(Side::B.to_string(), "B");
    }
}
