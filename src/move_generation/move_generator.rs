//! Candidate destination generation by ray walking.
//!
//! For every direction of a `MovementRule` a ray is traced from the square next
//! to the piece. The ray ends at the board edge, before a piece with the same
//! owner, or on (and including) a piece with a different owner. Range limits cap
//! the number of steps per ray.
//!
//! Output order is the rule's direction order, nearest square first within a
//! direction. A piece that is not on the board simply has no moves.

use tracing::trace;

use crate::board::board_point::{BoardPoint, Vector};
use crate::board::game_board::GameBoard;
use crate::board::piece_id::PieceId;
use crate::moves::movement_rule::{MovementRule, RangeLimit};

/// Reachable squares for `piece_id` under `rule`.
pub fn find_available_moves<O: PartialEq>(
    board: &GameBoard<O>,
    piece_id: PieceId,
    rule: &MovementRule,
) -> Vec<BoardPoint> {
    let mut out = Vec::new();
    find_available_moves_in_place(board, piece_id, rule, &mut out);
    out
}

/// Appends reachable squares to `out`, reusing its allocation.
pub fn find_available_moves_in_place<O: PartialEq>(
    board: &GameBoard<O>,
    piece_id: PieceId,
    rule: &MovementRule,
    out: &mut Vec<BoardPoint>,
) {
    if rule.is_immobile() {
        return;
    }
    let Ok(origin) = board.locate(piece_id) else {
        return;
    };
    let Ok(Some(owner)) = board.owner_of(piece_id) else {
        return;
    };

    for &direction in rule.directions() {
        let found = trace_ray(board, origin, owner, direction, rule.range_limit(), out);
        trace!(piece = %piece_id, dx = direction.dx, dy = direction.dy, found, "traced ray");
    }
}

fn trace_ray<O: PartialEq>(
    board: &GameBoard<O>,
    origin: BoardPoint,
    owner: &O,
    direction: Vector,
    range_limit: RangeLimit,
    out: &mut Vec<BoardPoint>,
) -> usize {
    let start_len = out.len();
    let mut next = direction.locate_from(origin);
    let mut steps = 0u32;

    while range_limit.allows(steps) {
        steps += 1;
        // Stepping past the coordinate range is as off-board as stepping past the edge.
        let Some(target) = next else {
            break;
        };
        let Ok(occupant) = board.piece_at_strict(target) else {
            break;
        };
        // An empty square has no owner, so it never matches.
        if board.owner_of(occupant).ok().flatten() == Some(owner) {
            break;
        }
        out.push(target);
        if occupant.is_some() {
            break;
        }
        next = direction.locate_from(target);
    }

    out.len() - start_len
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::board::board_variants::new_chess_board;
    use crate::chess::chess_types::Color;
    use crate::moves::chess_rules::{
        bishop_rule, king_rule, knight_rule, pawn_rule, queen_rule, rook_rule, ALL_DIRECTIONS,
    };

    fn p(x: i32, y: i32) -> BoardPoint {
        BoardPoint::new(x, y)
    }

    #[test]
    fn rook_in_corner_of_empty_board_sees_fourteen_squares() {
        let mut board = new_chess_board();
        let rook = board.create_piece(Color::Light, None, Some(p(0, 0))).expect("create");
        let moves = find_available_moves(&board, rook, &rook_rule());

        let mut expected: Vec<BoardPoint> = (1..8).map(|x| p(x, 0)).collect();
        expected.extend((1..8).map(|y| p(0, y)));
        assert_eq!(moves, expected);
        assert_eq!(moves.iter().collect::<HashSet<_>>().len(), 14);
    }

    #[test]
    fn king_in_center_sees_eight_neighbours_in_rule_order() {
        let mut board = new_chess_board();
        let king = board.create_piece(Color::Dark, None, Some(p(4, 4))).expect("create");
        let moves = find_available_moves(&board, king, &king_rule());
        assert_eq!(
            moves,
            vec![
                p(5, 4),
                p(5, 5),
                p(4, 5),
                p(3, 5),
                p(3, 4),
                p(3, 3),
                p(4, 3),
                p(5, 3)
            ]
        );
    }

    #[test]
    fn own_piece_blocks_and_is_excluded() {
        let mut board = new_chess_board();
        let bishop = board.create_piece(Color::Light, None, Some(p(0, 0))).expect("create");
        board.create_piece(Color::Light, None, Some(p(2, 2))).expect("create");
        assert_eq!(find_available_moves(&board, bishop, &bishop_rule()), vec![p(1, 1)]);

        board.create_piece(Color::Light, None, Some(p(1, 1))).expect("create");
        assert!(find_available_moves(&board, bishop, &bishop_rule()).is_empty());
    }

    #[test]
    fn own_blocker_leaves_other_diagonals_untouched() {
        let mut board = new_chess_board();
        let bishop = board.create_piece(Color::Light, None, Some(p(3, 3))).expect("create");
        let open = find_available_moves(&board, bishop, &bishop_rule());

        board.create_piece(Color::Light, None, Some(p(5, 5))).expect("create");
        let blocked = find_available_moves(&board, bishop, &bishop_rule());

        let other_diagonals: Vec<BoardPoint> = open
            .iter()
            .copied()
            .filter(|sq| !(sq.x > 3 && sq.y > 3))
            .collect();
        let mut expected = vec![p(4, 4)];
        expected.extend(other_diagonals);
        assert_eq!(blocked, expected);
    }

    #[test]
    fn enemy_piece_is_a_capture_square_and_stops_the_ray() {
        let mut board = new_chess_board();
        let rook = board.create_piece(Color::Light, None, Some(p(0, 0))).expect("create");
        board.create_piece(Color::Dark, None, Some(p(3, 0))).expect("create");
        let moves = find_available_moves(&board, rook, &rook_rule());

        let mut expected = vec![p(1, 0), p(2, 0), p(3, 0)];
        expected.extend((1..8).map(|y| p(0, y)));
        assert_eq!(moves, expected);
    }

    #[test]
    fn knight_offsets_are_clipped_by_the_board_edge() {
        let mut board = new_chess_board();
        let knight = board.create_piece(Color::Light, None, Some(p(1, 1))).expect("create");
        assert_eq!(
            find_available_moves(&board, knight, &knight_rule()),
            vec![p(3, 2), p(2, 3), p(0, 3), p(3, 0)]
        );

        board.move_piece(knight, p(0, 0)).expect("move");
        assert_eq!(
            find_available_moves(&board, knight, &knight_rule()),
            vec![p(2, 1), p(1, 2)]
        );

        board.move_piece(knight, p(4, 4)).expect("move");
        assert_eq!(find_available_moves(&board, knight, &knight_rule()).len(), 8);
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut board = new_chess_board();
        let knight = board.create_piece(Color::Light, None, Some(p(1, 0))).expect("create");
        for x in 0..3 {
            board.create_piece(Color::Light, None, Some(p(x, 1))).expect("create");
        }
        assert_eq!(
            find_available_moves(&board, knight, &knight_rule()),
            vec![p(3, 1), p(2, 2), p(0, 2)]
        );
    }

    #[test]
    fn queen_covers_twenty_seven_squares_from_d4() {
        let mut board = new_chess_board();
        let queen = board.create_piece(Color::Dark, None, Some(p(3, 3))).expect("create");
        assert_eq!(find_available_moves(&board, queen, &queen_rule()).len(), 27);
    }

    #[test]
    fn bounded_range_caps_each_ray() {
        let mut board = new_chess_board();
        let piece = board.create_piece(Color::Dark, None, Some(p(0, 0))).expect("create");
        let rule = MovementRule::new([Vector::new(1, 0), Vector::new(0, 1)], RangeLimit::Steps(2));
        assert_eq!(
            find_available_moves(&board, piece, &rule),
            vec![p(1, 0), p(2, 0), p(0, 1), p(0, 2)]
        );
    }

    #[test]
    fn immobile_rules_and_unplaced_pieces_have_no_moves() {
        let mut board = new_chess_board();
        let pawn = board.create_piece(Color::Light, None, Some(p(4, 1))).expect("create");
        assert!(find_available_moves(&board, pawn, &pawn_rule()).is_empty());
        let zero = MovementRule::new(ALL_DIRECTIONS, RangeLimit::Steps(0));
        assert!(find_available_moves(&board, pawn, &zero).is_empty());

        let spare = board.create_piece(Color::Light, None, None).expect("create");
        assert!(find_available_moves(&board, spare, &queen_rule()).is_empty());
        assert!(find_available_moves(&board, PieceId::NONE, &queen_rule()).is_empty());
        assert!(find_available_moves(&board, PieceId::new(99), &queen_rule()).is_empty());
    }

    #[test]
    fn captured_piece_has_no_moves() {
        let mut board = new_chess_board();
        let rook = board.create_piece(Color::Light, None, Some(p(0, 0))).expect("create");
        let enemy = board.create_piece(Color::Dark, None, Some(p(0, 5))).expect("create");
        board.move_piece(rook, p(0, 5)).expect("capture");
        assert!(find_available_moves(&board, enemy, &rook_rule()).is_empty());
    }

    #[test]
    fn in_place_generation_appends() {
        let mut board = new_chess_board();
        let king = board.create_piece(Color::Light, None, Some(p(0, 0))).expect("create");
        let mut out = vec![p(7, 7)];
        find_available_moves_in_place(&board, king, &king_rule(), &mut out);
        assert_eq!(out, vec![p(7, 7), p(1, 0), p(1, 1), p(0, 1)]);
    }

    #[test]
    fn extreme_vectors_end_the_ray_instead_of_overflowing() {
        let mut board = new_chess_board();
        let piece = board.create_piece(Color::Light, None, Some(p(1, 0))).expect("create");
        let rule = MovementRule::new(
            [
                Vector::new(i32::MAX, 0),
                Vector::new(i32::MIN, i32::MIN),
                Vector::new(1, 0),
            ],
            RangeLimit::Unbounded,
        );
        assert_eq!(
            find_available_moves(&board, piece, &rule),
            (2..8).map(|x| p(x, 0)).collect::<Vec<_>>()
        );
    }
}
