use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::coord::{Coord, IntoFile};
use crate::error::ChessError;

/// Build a fresh (uncaptured, unmoved) piece at a validated coordinate.
pub fn create_piece(
    kind: PieceKind,
    color: Color,
    row: i32,
    column: impl IntoFile,
) -> Result<Piece, ChessError> {
    let position = Coord::new(row, column)?;
    Ok(Piece::new(kind, color, position))
}

/// Like [`create_piece`], with the kind given by name (`"knight"`, case-insensitive).
///
/// Fails with [`ChessError::InvalidPieceKind`] for a name outside the six kinds.
pub fn create_piece_named(
    name: &str,
    color: Color,
    row: i32,
    column: impl IntoFile,
) -> Result<Piece, ChessError> {
    let kind: PieceKind = name.parse()?;
    create_piece(kind, color, row, column)
}
