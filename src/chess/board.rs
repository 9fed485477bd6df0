use std::fmt;

use rustc_hash::FxHashMap;

use crate::chess::moves::MoveSet;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::chess::record::PieceRecord;
use crate::chess::render::{render, RenderConfig};
use crate::core::coord::Coord;
use crate::core::square::Square;
use crate::error::ChessError;

/// Back-rank kinds from file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Owns every piece of one game.
///
/// Active pieces live in `grid`, at most one per square. A captured piece is moved to
/// `captured` and stays there, so it remains addressable but is never returned by
/// [`Board::piece_at`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    grid: FxHashMap<Square, Piece>,
    captured: Vec<Piece>,
}

impl Board {
    /// A board in the standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_positions();
        board
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Drop all state and install the 32-piece starting layout.
    pub fn setup_initial_positions(&mut self) {
        self.grid.clear();
        self.captured.clear();

        for col in 1..=8u8 {
            self.place(Piece::new(PieceKind::Pawn, Color::White, Coord::at(2, col)));
            self.place(Piece::new(PieceKind::Pawn, Color::Black, Coord::at(7, col)));
        }
        for (kind, col) in BACK_RANK.into_iter().zip(1..=8u8) {
            self.place(Piece::new(kind, Color::White, Coord::at(1, col)));
            self.place(Piece::new(kind, Color::Black, Coord::at(8, col)));
        }
    }

    /// Put `piece` on its own square, returning whatever stood there.
    ///
    /// The displaced piece is not marked captured; this is a setup primitive.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.grid.insert(piece.position().square(), piece)
    }

    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<&Piece> {
        self.grid.get(&c.square())
    }

    /// Relocate the piece on `from` to `to`, capturing any occupant of `to`.
    ///
    /// No legality check of any kind. Returns the kind of the captured piece, if any.
    /// On error the board is unchanged.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<Option<PieceKind>, ChessError> {
        if from == to {
            if self.piece_at(from).is_none() {
                return Err(ChessError::NoPieceAtSource { from });
            }
            return Err(ChessError::NullMove { at: from });
        }

        let mut piece = self
            .grid
            .remove(&from.square())
            .ok_or(ChessError::NoPieceAtSource { from })?;

        let captured = match self.grid.remove(&to.square()) {
            Some(mut victim) => {
                victim.kill();
                let kind = victim.kind();
                self.captured.push(victim);
                Some(kind)
            }
            None => None,
        };

        piece.relocate(to);
        piece.mark_moved();
        self.grid.insert(to.square(), piece);
        Ok(captured)
    }

    /// Every tracked piece: active ones by ascending square, then captured ones in capture order.
    pub fn all_pieces(&self) -> Vec<&Piece> {
        let mut out = self.active_pieces();
        out.extend(self.captured.iter());
        out
    }

    /// Pieces still on the board, by ascending square.
    pub fn active_pieces(&self) -> Vec<&Piece> {
        let mut entries: Vec<(&Square, &Piece)> = self.grid.iter().collect();
        entries.sort_unstable_by_key(|(sq, _)| **sq);
        entries.into_iter().map(|(_, p)| p).collect()
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Geometric moves of the piece on `from`.
    pub fn moves_from(&self, from: Coord) -> Result<MoveSet, ChessError> {
        self.source(from).map(Piece::moves)
    }

    /// Geometric attacks of the piece on `from`.
    pub fn attacks_from(&self, from: Coord) -> Result<MoveSet, ChessError> {
        self.source(from).map(Piece::attacks)
    }

    /// Moves of the piece on `from`, with each ray cut at the first occupied square.
    ///
    /// The blocking square is kept only if it holds an opposing piece and the mover is not a
    /// pawn (pawns never capture straight ahead).
    pub fn reachable_moves(&self, from: Coord) -> Result<MoveSet, ChessError> {
        let piece = self.source(from)?;
        let own = piece.color();
        let can_capture = piece.kind() != PieceKind::Pawn;
        Ok(self.clip(&piece.moves(), |blocker| {
            can_capture && blocker.color() != own
        }))
    }

    /// Attacks of the piece on `from`, with each ray cut at (and including) the first
    /// occupied square, whatever its color.
    pub fn reachable_attacks(&self, from: Coord) -> Result<MoveSet, ChessError> {
        self.source(from).map(|p| self.clip(&p.attacks(), |_| true))
    }

    /// True iff some active piece of `by` attacks `target`, with blocking applied.
    pub fn is_attacked_by(&self, target: Coord, by: Color) -> bool {
        self.grid
            .values()
            .filter(|p| p.color() == by)
            .any(|p| self.clip(&p.attacks(), |_| true).contains(target))
    }

    pub fn to_records(&self) -> Vec<PieceRecord> {
        self.all_pieces().into_iter().map(PieceRecord::from).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_records())
    }

    pub fn render(&self, cfg: &RenderConfig) -> String {
        render(self, cfg)
    }

    fn source(&self, from: Coord) -> Result<&Piece, ChessError> {
        self.piece_at(from)
            .ok_or(ChessError::NoPieceAtSource { from })
    }

    fn clip(&self, set: &MoveSet, keep_blocker: impl Fn(&Piece) -> bool) -> MoveSet {
        let rays = set
            .rays()
            .iter()
            .filter_map(|ray| {
                let mut out = Vec::with_capacity(ray.len());
                for &c in ray {
                    match self.piece_at(c) {
                        None => out.push(c),
                        Some(blocker) => {
                            if keep_blocker(blocker) {
                                out.push(c);
                            }
                            break;
                        }
                    }
                }
                (!out.is_empty()).then_some(out)
            })
            .collect();
        MoveSet::new(set.origin(), rays, set.is_attack())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}
