//! A chessboard model with geometric (pseudo-legal) move and attack generation.
//!
//! Layers, leaf first:
//! - [`core`]: validated coordinates and the linear `1..=64` square key.
//! - [`chess`]: pieces, ray generation, the piece factory and the [`chess::board::Board`].
//! - [`game`]: turn order and move history around one board.
//!
//! Nothing here checks king safety, castling, en passant or promotion.

pub mod chess;
pub mod core;
pub mod error;
pub mod game;

pub use crate::chess::board::Board;
pub use crate::chess::factory::{create_piece, create_piece_named};
pub use crate::chess::moves::MoveSet;
pub use crate::chess::piece::{Color, Piece, PieceKind};
pub use crate::core::coord::{Coord, File};
pub use crate::core::square::Square;
pub use crate::error::ChessError;
pub use crate::game::Game;
