//! Terminal-oriented text renderers for the board variants.
//!
//! Renderers only read the board through `piece_at` and `name_of`. Empty
//! squares show the variant's background glyph, occupied squares the piece name.

use crate::board::board_point::BoardPoint;
use crate::board::game_board::{GameBoard, DEFAULT_PIECE_NAME};
use crate::utils::square_names::file_letter;

const CHESS_LIGHT_SQUARE: char = '·';
const CHESS_DARK_SQUARE: char = '█';
/// Label for files that have no square name.
const UNNAMED_FILE: char = '?';

/// Xiangqi grid, top row (y = 9) first. The river splits rows 4 and 5.
const XIANGQI_GRID: [&str; 10] = [
    "┌┬┬┲┳┱┬┬┐",
    "├┼┼╊╳╉┼┼┤",
    "├╬┼╄╇╃┼╬┤",
    "╠┼╬┼╬┼╬┼╣",
    "├┴┴┴┴┴┴┴┤",
    "├┬┬┬┬┬┬┬┤",
    "╠┼╬┼╬┼╬┼╣",
    "├╬┼╆╈╅┼╬┤",
    "├┼┼╊╳╉┼┼┤",
    "└┴┴┺┻┹┴┴┘",
];
const XIANGQI_TOP_LABELS: &str = "１２３４５６７８９";
const XIANGQI_BOTTOM_LABELS: &str = "九八七六五四三二一";

fn occupant_name<O>(board: &GameBoard<O>, point: BoardPoint) -> Option<&str> {
    let id = board.piece_at(point);
    if id.is_none() {
        return None;
    }
    Some(board.name_of(id).unwrap_or(DEFAULT_PIECE_NAME))
}

/// Render a chess-style board.
///
/// Assumes `(0, 0)` is a1 and is drawn bottom-left. Files past `z` have no
/// square name and are labelled `?`.
pub fn render_chess_board<O>(board: &GameBoard<O>) -> String {
    let files: String = (0..board.width() as i32)
        .map(|x| file_letter(x).unwrap_or(UNNAMED_FILE).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let label_width = board.height().to_string().len();
    let margin = " ".repeat(label_width + 1);

    let mut out = String::new();
    out.push_str(&format!("{margin}{files}\n"));

    for y in (0..board.height() as i32).rev() {
        let rank = y + 1;
        out.push_str(&format!("{rank:>label_width$} "));
        for x in 0..board.width() as i32 {
            let point = BoardPoint::new(x, y);
            match occupant_name(board, point) {
                Some(name) => out.push_str(name),
                None if (x + y) % 2 == 0 => out.push(CHESS_DARK_SQUARE),
                None => out.push(CHESS_LIGHT_SQUARE),
            }
            if x + 1 < board.width() as i32 {
                out.push(' ');
            }
        }
        out.push_str(&format!(" {rank}\n"));
    }

    out.push_str(&format!("{margin}{files}"));
    out
}

/// Render a 9x10 xiangqi board with its grid, river and palaces.
pub fn render_xiangqi_board<O>(board: &GameBoard<O>) -> String {
    let grid: Vec<Vec<char>> = XIANGQI_GRID.iter().map(|row| row.chars().collect()).collect();
    let height = board.height() as i32;

    let mut out = String::new();
    out.push_str(XIANGQI_TOP_LABELS);
    out.push('\n');

    for y in (0..height).rev() {
        let grid_row = grid.get((height - 1 - y) as usize);
        for x in 0..board.width() as i32 {
            let point = BoardPoint::new(x, y);
            match occupant_name(board, point) {
                Some(name) => out.push_str(name),
                None => out.push(
                    grid_row
                        .and_then(|row| row.get(x as usize))
                        .copied()
                        .unwrap_or('┼'),
                ),
            }
        }
        out.push('\n');
    }

    out.push_str(XIANGQI_BOTTOM_LABELS);
    out
}
