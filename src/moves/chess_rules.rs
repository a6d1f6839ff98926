//! Movement rules for the international chess archetypes.
//!
//! Castling, en-passant, promotion and king safety are not modeled. The pawn
//! rule is an immobile placeholder.

use crate::board::board_point::Vector;
use crate::chess::chess_types::PieceKind;
use crate::moves::movement_rule::{MovementRule, RangeLimit};

pub const ORTHOGONAL_DIRECTIONS: [Vector; 4] = [
    Vector::new(1, 0),
    Vector::new(0, 1),
    Vector::new(-1, 0),
    Vector::new(0, -1),
];

pub const DIAGONAL_DIRECTIONS: [Vector; 4] = [
    Vector::new(1, 1),
    Vector::new(-1, 1),
    Vector::new(-1, -1),
    Vector::new(1, -1),
];

/// Counter-clockwise from +x.
pub const ALL_DIRECTIONS: [Vector; 8] = [
    Vector::new(1, 0),
    Vector::new(1, 1),
    Vector::new(0, 1),
    Vector::new(-1, 1),
    Vector::new(-1, 0),
    Vector::new(-1, -1),
    Vector::new(0, -1),
    Vector::new(1, -1),
];

pub const KNIGHT_OFFSETS: [Vector; 8] = [
    Vector::new(2, 1),
    Vector::new(1, 2),
    Vector::new(-1, 2),
    Vector::new(-2, 1),
    Vector::new(-2, -1),
    Vector::new(-1, -2),
    Vector::new(1, -2),
    Vector::new(2, -1),
];

pub fn king_rule() -> MovementRule {
    MovementRule::new(ALL_DIRECTIONS, RangeLimit::Steps(1))
}

pub fn queen_rule() -> MovementRule {
    MovementRule::new(ALL_DIRECTIONS, RangeLimit::Unbounded)
}

pub fn rook_rule() -> MovementRule {
    MovementRule::new(ORTHOGONAL_DIRECTIONS, RangeLimit::Unbounded)
}

pub fn bishop_rule() -> MovementRule {
    MovementRule::new(DIAGONAL_DIRECTIONS, RangeLimit::Unbounded)
}

pub fn knight_rule() -> MovementRule {
    MovementRule::new(KNIGHT_OFFSETS, RangeLimit::Steps(1))
}

// TODO: forward pushes, double step and diagonal captures need a side-aware rule.
pub fn pawn_rule() -> MovementRule {
    MovementRule::new(Vec::new(), RangeLimit::Steps(0))
}

impl MovementRule {
    pub fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => pawn_rule(),
            PieceKind::Knight => knight_rule(),
            PieceKind::Bishop => bishop_rule(),
            PieceKind::Rook => rook_rule(),
            PieceKind::Queen => queen_rule(),
            PieceKind::King => king_rule(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_shapes() {
        let king = MovementRule::for_kind(PieceKind::King);
        assert_eq!(king.directions().len(), 8);
        assert_eq!(king.range_limit(), RangeLimit::Steps(1));

        let queen = MovementRule::for_kind(PieceKind::Queen);
        assert_eq!(queen.directions(), king.directions());
        assert_eq!(queen.range_limit(), RangeLimit::Unbounded);

        assert_eq!(rook_rule().directions(), &ORTHOGONAL_DIRECTIONS);
        assert_eq!(bishop_rule().directions(), &DIAGONAL_DIRECTIONS);
        assert_eq!(knight_rule().range_limit(), RangeLimit::Steps(1));
        assert!(pawn_rule().is_immobile());
    }

    #[test]
    fn queen_directions_are_rook_plus_bishop() {
        let queen = queen_rule();
        for d in ORTHOGONAL_DIRECTIONS.iter().chain(DIAGONAL_DIRECTIONS.iter()) {
            assert!(queen.directions().contains(d));
        }
    }
}
