use crate::chess::board::Board;
use crate::chess::piece::{Color, PieceKind};
use crate::core::coord::{Coord, MAX_AXIS, MIN_AXIS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSet {
    /// Chess figures; White uses the filled set.
    Unicode,
    /// `PRNBQK` for White, lowercase for Black.
    Ascii,
}

/// Text grid settings (pure Rust, no files).
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub glyphs: GlyphSet,
    /// Printed for an empty square.
    pub empty: char,
    /// Printed between two cells of a row.
    pub separator: &'static str,
}

impl RenderConfig {
    pub fn new(glyphs: GlyphSet, empty: char, separator: &'static str) -> Self {
        Self {
            glyphs,
            empty,
            separator,
        }
    }

    pub fn ascii() -> Self {
        Self::new(GlyphSet::Ascii, '.', " ")
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(GlyphSet::Unicode, '.', "  ")
    }
}

pub fn glyph(kind: PieceKind, color: Color, set: GlyphSet) -> char {
    use PieceKind::*;
    match set {
        GlyphSet::Unicode => match (color, kind) {
            (Color::White, Pawn) => '♟',
            (Color::White, Rook) => '♜',
            (Color::White, Knight) => '♞',
            (Color::White, Bishop) => '♝',
            (Color::White, Queen) => '♛',
            (Color::White, King) => '♚',
            (Color::Black, Pawn) => '♙',
            (Color::Black, Rook) => '♖',
            (Color::Black, Knight) => '♘',
            (Color::Black, Bishop) => '♗',
            (Color::Black, Queen) => '♕',
            (Color::Black, King) => '♔',
        },
        GlyphSet::Ascii => {
            let c = match kind {
                Pawn => 'P',
                Rook => 'R',
                Knight => 'N',
                Bishop => 'B',
                Queen => 'Q',
                King => 'K',
            };
            match color {
                Color::White => c,
                Color::Black => c.to_ascii_lowercase(),
            }
        }
    }
}

/// Rank 8 first, file a to h left to right. Diagnostic output only.
pub fn render(board: &Board, cfg: &RenderConfig) -> String {
    (MIN_AXIS..=MAX_AXIS)
        .rev()
        .map(|row| {
            (MIN_AXIS..=MAX_AXIS)
                .map(|col| {
                    board
                        .piece_at(Coord::at(row as u8, col as u8))
                        .map_or(cfg.empty, |p| glyph(p.kind(), p.color(), cfg.glyphs))
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(cfg.separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board_unicode() {
        let text = render(&Board::new(), &RenderConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖");
        assert_eq!(lines[1], "♙  ♙  ♙  ♙  ♙  ♙  ♙  ♙");
        assert_eq!(lines[4], ".  .  .  .  .  .  .  .");
        assert_eq!(lines[7], "♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜");
    }

    #[test]
    fn ascii_after_a_move() {
        let mut board = Board::new();
        board
            .move_piece("e2".parse().unwrap(), "e4".parse().unwrap())
            .unwrap();
        let text = render(&board, &RenderConfig::ascii());
        let expected = "\
r n b q k b n r
p p p p p p p p
. . . . . . . .
. . . . . . . .
. . . . P . . .
. . . . . . . .
P P P P . P P P
R N B Q K B N R";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_board_uses_placeholder() {
        let cfg = RenderConfig::new(GlyphSet::Ascii, '-', "");
        let text = render(&Board::empty(), &cfg);
        assert!(text.lines().all(|l| l == "--------"));
    }
}
