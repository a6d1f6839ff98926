//! Standard international chess starting position.
//!
//! Creates the 32 pieces on an 8x8 board, names them with their Unicode glyph
//! and builds the rule table that maps every piece id to its `MovementRule`.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::board::board_errors::BoardResult;
use crate::board::board_point::BoardPoint;
use crate::board::game_board::GameBoard;
use crate::board::piece_id::PieceId;
use crate::chess::chess_types::{Color, PieceKind};
use crate::moves::movement_rule::MovementRule;

/// Piece id -> movement rule. Owned by the caller, not by the board.
pub type RuleTable = HashMap<PieceId, MovementRule>;

/// Back-rank pieces in creation order with their file.
const BACK_RANK: [(PieceKind, i32); 8] = [
    (PieceKind::King, 4),
    (PieceKind::Queen, 3),
    (PieceKind::Rook, 0),
    (PieceKind::Rook, 7),
    (PieceKind::Knight, 1),
    (PieceKind::Knight, 6),
    (PieceKind::Bishop, 2),
    (PieceKind::Bishop, 5),
];

/// [back rank, pawn rank] per `Color::index()`.
const HOME_RANKS: [(i32, i32); 2] = [(0, 1), (7, 6)];

#[derive(Debug, Clone, Default)]
pub struct StandardOpening {
    kinds: BTreeMap<PieceId, PieceKind>,
    rules: RuleTable,
}

impl StandardOpening {
    /// Place both armies, Light first, on an empty chess board.
    pub fn set_up(board: &mut GameBoard<Color>) -> BoardResult<Self> {
        let mut opening = Self::default();
        for color in [Color::Light, Color::Dark] {
            let (back_rank, pawn_rank) = HOME_RANKS[color.index()];
            for (kind, file) in BACK_RANK {
                opening.add_piece(board, color, kind, BoardPoint::new(file, back_rank))?;
            }
            for file in 0..8 {
                opening.add_piece(board, color, PieceKind::Pawn, BoardPoint::new(file, pawn_rank))?;
            }
        }
        debug!(pieces = opening.kinds.len(), "set up standard opening");
        Ok(opening)
    }

    fn add_piece(
        &mut self,
        board: &mut GameBoard<Color>,
        color: Color,
        kind: PieceKind,
        point: BoardPoint,
    ) -> BoardResult<PieceId> {
        let glyph = kind.glyph(color).to_string();
        let id = board.create_piece(color, Some(&glyph), Some(point))?;
        self.kinds.insert(id, kind);
        self.rules.insert(id, MovementRule::for_kind(kind));
        Ok(id)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn rule_for(&self, id: PieceId) -> Option<&MovementRule> {
        self.rules.get(&id)
    }

    pub fn kind_of(&self, id: PieceId) -> Option<PieceKind> {
        self.kinds.get(&id).copied()
    }

    /// Every piece created by the setup, in id order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, PieceKind)> + '_ {
        self.kinds.iter().map(|(id, kind)| (*id, *kind))
    }
}
