//! Coordinate primitives with no knowledge of pieces.
//!
//! - [`coord`]: validated files and coordinates, plus unvalidated [`coord::Delta`] steps.
//! - [`square`]: the linear `1..=64` position number used as the board key.

pub mod coord;
pub mod square;
