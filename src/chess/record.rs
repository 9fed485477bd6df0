use serde::{Deserialize, Serialize};

use crate::chess::piece::{Color, Piece};

/// Flat per-piece record for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub name: String,
    pub color: Color,
    pub row: u8,
    pub column: u8,
    /// Algebraic square, e.g. `"e2"`.
    pub str_position: String,
}

impl From<&Piece> for PieceRecord {
    fn from(p: &Piece) -> Self {
        let pos = p.position();
        Self {
            name: p.display_name(),
            color: p.color(),
            row: pos.row(),
            column: pos.column(),
            str_position: pos.to_string(),
        }
    }
}
