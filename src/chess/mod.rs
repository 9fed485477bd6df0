//! Pieces, their geometric move generation, and the board that owns them.

pub mod board;
pub mod factory;
pub mod moves;
pub mod piece;
pub mod record;
pub mod render;
