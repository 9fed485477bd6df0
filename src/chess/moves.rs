//! Geometric ray generation and the [`MoveSet`] result type.
//!
//! Generation only knows about board edges. Occupancy is handled by
//! [`Board::reachable_moves`](crate::chess::board::Board::reachable_moves) and friends.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::piece::Color;
use crate::core::coord::{Coord, Delta};

/// Squares in one direction, nearest first.
pub type Ray = Vec<Coord>;

/// The reachable squares of one piece, grouped by ray.
///
/// Ray order is the piece kind's fixed direction order, and squares within a ray are in
/// strictly increasing distance from `origin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    origin: Coord,
    rays: Vec<Ray>,
    is_attack: bool,
}

impl MoveSet {
    pub fn new(origin: Coord, rays: Vec<Ray>, is_attack: bool) -> Self {
        Self {
            origin,
            rays,
            is_attack,
        }
    }

    #[inline]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    #[inline]
    pub fn is_attack(&self) -> bool {
        self.is_attack
    }

    /// All squares, ray by ray.
    pub fn destinations(&self) -> impl Iterator<Item = Coord> + '_ {
        self.rays.iter().flatten().copied()
    }

    /// Number of squares across all rays.
    pub fn len(&self) -> usize {
        self.rays.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.destinations().any(|d| d == c)
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to = self
            .destinations()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "from position: {}, to position: {}, is attack: {}",
            self.origin, to, self.is_attack
        )
    }
}

/// One ray per direction, each running to the board edge.
///
/// Directions that are immediately off-board still yield an (empty) ray, so the outer length
/// always equals `dirs.len()`.
pub fn slide(origin: Coord, dirs: &[Delta]) -> Vec<Ray> {
    dirs.iter()
        .map(|&dir| {
            let mut ray = Vec::with_capacity(7);
            let mut cur = origin.step(dir);
            while let Some(c) = cur {
                ray.push(c);
                cur = c.step(dir);
            }
            ray
        })
        .collect()
}

/// One single-square ray per offset that lands on the board.
pub fn leap(origin: Coord, offsets: &[Delta]) -> Vec<Ray> {
    offsets
        .iter()
        .filter_map(|&d| origin.step(d))
        .map(|c| vec![c])
        .collect()
}

/// The forward push ray: one square, plus a second if the pawn has never moved.
///
/// Empty (no ray at all) when the pawn stands on its last row.
pub fn pawn_pushes(origin: Coord, color: Color, has_moved: bool) -> Vec<Ray> {
    let fwd = color.forward();
    let Some(one) = origin.offset(fwd, 0) else {
        return Vec::new();
    };
    let mut ray = vec![one];
    if !has_moved {
        if let Some(two) = one.offset(fwd, 0) {
            ray.push(two);
        }
    }
    vec![ray]
}

/// Forward-left then forward-right (by file), each present only if on the board.
pub fn pawn_captures(origin: Coord, color: Color) -> Vec<Ray> {
    let fwd = color.forward();
    [-1, 1]
        .into_iter()
        .filter_map(|dc| origin.offset(fwd, dc))
        .map(|c| vec![c])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::{BISHOP_DIRS, ROOK_DIRS};

    fn sq(s: &str) -> Coord {
        s.parse().unwrap()
    }

    #[test]
    fn slide_from_corner_keeps_empty_rays() {
        let rays = slide(sq("a1"), &ROOK_DIRS);
        let lens: Vec<usize> = rays.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![7, 7, 0, 0]);
        assert_eq!(rays[0].last(), Some(&sq("a8")));
        assert_eq!(rays[1].last(), Some(&sq("h1")));
    }

    #[test]
    fn slide_squares_are_nearest_first() {
        let rays = slide(sq("c3"), &BISHOP_DIRS);
        assert_eq!(rays[0], vec![sq("d4"), sq("e5"), sq("f6"), sq("g7"), sq("h8")]);
        assert_eq!(rays[1], vec![sq("d2"), sq("e1")]);
        assert_eq!(rays[2], vec![sq("b2"), sq("a1")]);
        assert_eq!(rays[3], vec![sq("b4"), sq("a5")]);
    }

    #[test]
    fn black_pawn_moves_down() {
        let rays = pawn_pushes(sq("e7"), Color::Black, false);
        assert_eq!(rays, vec![vec![sq("e6"), sq("e5")]]);
        assert!(pawn_pushes(sq("e1"), Color::Black, true).is_empty());
    }

    #[test]
    fn pawn_double_step_needs_room() {
        // One step to the last row, no second square exists.
        assert_eq!(
            pawn_pushes(sq("c7"), Color::White, false),
            vec![vec![sq("c8")]]
        );
    }

    #[test]
    fn pawn_captures_clip_at_edge() {
        assert_eq!(pawn_captures(sq("a2"), Color::White), vec![vec![sq("b3")]]);
        assert_eq!(
            pawn_captures(sq("d5"), Color::Black),
            vec![vec![sq("c4")], vec![sq("e4")]]
        );
        assert!(pawn_captures(sq("d8"), Color::White).is_empty());
    }

    #[test]
    fn display_lists_every_square() {
        let set = MoveSet::new(sq("a1"), leap(sq("a1"), &crate::chess::piece::KNIGHT_DELTAS), false);
        assert_eq!(
            set.to_string(),
            "from position: a1, to position: b3, c2, is attack: false"
        );
    }
}
