use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess::moves::{self, MoveSet};
use crate::core::coord::{Coord, Delta};
use crate::error::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        use PieceKind::*;
        match self {
            Pawn => "pawn",
            Rook => "rook",
            Knight => "knight",
            Bishop => "bishop",
            Queen => "queen",
            King => "king",
        }
    }

    /// Unit directions for sliding pieces, in enumeration order.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Delta] {
        use PieceKind::*;
        match self {
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            Queen => &QUEEN_DIRS,
            _ => &[],
        }
    }

    /// Fixed single-jump offsets for leaping pieces, in enumeration order.
    #[inline]
    pub fn leaps(self) -> &'static [Delta] {
        use PieceKind::*;
        match self {
            Knight => &KNIGHT_DELTAS,
            King => &KING_STEPS,
            _ => &[],
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ChessError::InvalidPieceKind {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction a pawn of this color advances in.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on (or captured from) the board.
///
/// `captured` and `has_moved` only ever flip from `false` to `true`, and only the board does it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Coord,
    captured: bool,
    has_moved: bool,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, position: Coord) -> Self {
        Self {
            kind,
            color,
            position,
            captured: false,
            has_moved: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Color followed by kind, e.g. `"whitepawn"`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.color.name(), self.kind.name())
    }

    pub(crate) fn kill(&mut self) {
        self.captured = true;
    }

    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    pub(crate) fn relocate(&mut self, to: Coord) {
        self.position = to;
    }

    /// Pseudo-legal destinations, ignoring every other piece on the board.
    pub fn moves(&self) -> MoveSet {
        use PieceKind::*;
        let rays = match self.kind {
            Pawn => moves::pawn_pushes(self.position, self.color, self.has_moved),
            Rook | Bishop | Queen => moves::slide(self.position, self.kind.slide_dirs()),
            Knight | King => moves::leap(self.position, self.kind.leaps()),
        };
        MoveSet::new(self.position, rays, false)
    }

    /// Attacked squares. Equal to [`Piece::moves`] for every kind but the pawn.
    pub fn attacks(&self) -> MoveSet {
        use PieceKind::*;
        let rays = match self.kind {
            Pawn => moves::pawn_captures(self.position, self.color),
            Rook | Bishop | Queen => moves::slide(self.position, self.kind.slide_dirs()),
            Knight | King => moves::leap(self.position, self.kind.leaps()),
        };
        MoveSet::new(self.position, rays, true)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.kind,
            self.color,
            self.position,
            if self.captured { "captured" } else { "active" },
            if self.has_moved { "moved" } else { "unmoved" }
        )
    }
}

// (row, column) steps. "Up" is toward row 8, "right" toward file h.

pub const ROOK_DIRS: [Delta; 4] = [
    Delta { row: 1, col: 0 },
    Delta { row: 0, col: 1 },
    Delta { row: -1, col: 0 },
    Delta { row: 0, col: -1 },
];

pub const BISHOP_DIRS: [Delta; 4] = [
    Delta { row: 1, col: 1 },
    Delta { row: -1, col: 1 },
    Delta { row: -1, col: -1 },
    Delta { row: 1, col: -1 },
];

pub const QUEEN_DIRS: [Delta; 8] = [
    Delta { row: 1, col: 0 },
    Delta { row: 1, col: 1 },
    Delta { row: 0, col: 1 },
    Delta { row: -1, col: 1 },
    Delta { row: -1, col: 0 },
    Delta { row: -1, col: -1 },
    Delta { row: 0, col: -1 },
    Delta { row: 1, col: -1 },
];

pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta { row: 2, col: 1 },
    Delta { row: 1, col: 2 },
    Delta { row: -1, col: 2 },
    Delta { row: -2, col: 1 },
    Delta { row: -2, col: -1 },
    Delta { row: -1, col: -2 },
    Delta { row: 1, col: -2 },
    Delta { row: 2, col: -1 },
];

pub const KING_STEPS: [Delta; 8] = [
    Delta { row: -1, col: 0 },
    Delta { row: -1, col: 1 },
    Delta { row: 0, col: 1 },
    Delta { row: 1, col: 1 },
    Delta { row: 1, col: 0 },
    Delta { row: 1, col: -1 },
    Delta { row: 0, col: -1 },
    Delta { row: -1, col: -1 },
];
