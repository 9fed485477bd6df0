use std::fmt;

use crate::core::coord::Coord;
use crate::error::ChessError;

pub const MIN_SQUARE: i32 = 1;
pub const MAX_SQUARE: i32 = 64;

/// A board square as its linear position number `(row - 1) * 8 + column`, in `1..=64`.
///
/// This is the board's map key. It can only be built from a validated [`Coord`] or a checked
/// number, so every `Square` names a real square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn from_number(n: i32) -> Result<Square, ChessError> {
        if !(MIN_SQUARE..=MAX_SQUARE).contains(&n) {
            return Err(ChessError::InvalidPositionNumber { value: n });
        }
        Ok(Square(n as u8))
    }

    #[inline]
    pub fn from_coord(c: Coord) -> Square {
        Square((c.row() - 1) * 8 + c.column())
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn coord(self) -> Coord {
        let i = self.0 - 1;
        Coord::at(i / 8 + 1, i % 8 + 1)
    }

    /// All 64 squares in ascending order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        ((MIN_SQUARE as u8)..=(MAX_SQUARE as u8)).map(Square)
    }
}

impl From<Coord> for Square {
    #[inline]
    fn from(c: Coord) -> Square {
        Square::from_coord(c)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
