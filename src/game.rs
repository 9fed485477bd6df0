use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::board::Board;
use crate::chess::piece::{Color, PieceKind};
use crate::core::coord::Coord;
use crate::error::ChessError;

pub const TURN_START_INDEX: u32 = 1;

/// One applied move, as recorded by [`Game::play`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Coord,
    pub to: Coord,
    pub color: Color,
    pub mover: PieceKind,
    pub captured: Option<PieceKind>,
}

/// Turn order and move history around a single [`Board`].
///
/// This is sequencing only: whose turn it is and what was played. Move legality is not checked.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    turn_index: u32,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            turn_index: TURN_START_INDEX,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Half-move counter, starting at 1.
    #[inline]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    #[inline]
    pub fn full_move_number(&self) -> u32 {
        (self.turn_index + 1) / 2
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
        self.turn_index += 1;
    }

    /// Apply `from -> to` on the board, record it and pass the turn.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<&MoveRecord, ChessError> {
        let (mover, color) = self
            .board
            .piece_at(from)
            .map(|p| (p.kind(), p.color()))
            .ok_or(ChessError::NoPieceAtSource { from })?;
        let captured = self.board.move_piece(from, to)?;

        self.history.push(MoveRecord {
            from,
            to,
            color,
            mover,
            captured,
        });
        self.switch_turn();
        Ok(&self.history[self.history.len() - 1])
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Turn: {} in_move: {}",
            self.turn,
            self.full_move_number()
        )?;
        write!(f, "{}", self.board)
    }
}
