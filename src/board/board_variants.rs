//! Concrete board variants.
//!
//! A variant is only a pair of dimensions; all behavior lives in `GameBoard`.

use crate::board::game_board::GameBoard;

pub const CHESS_WIDTH: u16 = 8;
pub const CHESS_HEIGHT: u16 = 8;

pub const XIANGQI_WIDTH: u16 = 9;
pub const XIANGQI_HEIGHT: u16 = 10;

/// Empty 8x8 international chess board.
pub fn new_chess_board<O>() -> GameBoard<O> {
    GameBoard::with_valid_dimensions(CHESS_WIDTH, CHESS_HEIGHT)
}

/// Empty 9x10 Chinese xiangqi board (pieces stand on intersections).
pub fn new_xiangqi_board<O>() -> GameBoard<O> {
    GameBoard::with_valid_dimensions(XIANGQI_WIDTH, XIANGQI_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_point::BoardPoint;

    #[test]
    fn variants_have_expected_dimensions() {
        let chess = new_chess_board::<u8>();
        assert_eq!((chess.width(), chess.height()), (8, 8));
        assert!(chess.contains(BoardPoint::new(7, 7)));
        assert!(!chess.contains(BoardPoint::new(8, 7)));

        let xiangqi = new_xiangqi_board::<u8>();
        assert_eq!((xiangqi.width(), xiangqi.height()), (9, 10));
        assert!(xiangqi.contains(BoardPoint::new(8, 9)));
        assert!(!xiangqi.contains(BoardPoint::new(8, 10)));
    }
}
