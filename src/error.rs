use std::fmt;

use crate::core::coord::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors returned by coordinate construction, the piece factory and board mutation.
pub enum ChessError {
    /// A file was neither a letter in `a..=h` nor a number in `1..=8`.
    InvalidFile { value: String },
    /// A row or numeric column outside `1..=8`.
    InvalidCoordinate { row: i32, column: i32 },
    /// A linear square number outside `1..=64`.
    InvalidPositionNumber { value: i32 },
    /// The piece factory was asked for a kind it does not know.
    InvalidPieceKind { name: String },
    /// A move was requested from an empty square.
    NoPieceAtSource { from: Coord },
    /// A move whose source and destination coincide.
    NullMove { at: Coord },
    /// Algebraic square text (e.g. `"e2"`) that is structurally malformed.
    InvalidSquareName { text: String },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFile { value } => {
                write!(f, "invalid file {value:?}: must be a letter a-h or a number 1-8")
            }
            ChessError::InvalidCoordinate { row, column } => write!(
                f,
                "invalid coordinate (row={row}, column={column}): both must be in 1..=8"
            ),
            ChessError::InvalidPositionNumber { value } => {
                write!(f, "invalid position number {value}: must be in 1..=64")
            }
            ChessError::InvalidPieceKind { name } => write!(f, "unknown piece kind {name:?}"),
            ChessError::NoPieceAtSource { from } => write!(f, "no piece at {from}"),
            ChessError::NullMove { at } => write!(f, "source and destination are both {at}"),
            ChessError::InvalidSquareName { text } => write!(f, "malformed square name {text:?}"),
        }
    }
}

impl std::error::Error for ChessError {}
