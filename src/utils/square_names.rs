//! Square naming for display, e.g. `(4, 3)` <-> `"e4"`.
//!
//! Files are letters `a..z` taken from `x`; ranks are 1-based decimal numbers
//! taken from `y`, so the 10-row xiangqi board has names like `"i10"`. Board
//! bounds are not checked here.

use crate::board::board_errors::{BoardError, BoardResult};
use crate::board::board_point::BoardPoint;

const MAX_FILES: i32 = 26;

/// File letter for column `x`, or `None` past `z`.
pub fn file_letter(x: i32) -> Option<char> {
    if (0..MAX_FILES).contains(&x) {
        Some(char::from(b'a' + x as u8))
    } else {
        None
    }
}

/// Name of a square (for example `(4, 3)` -> `"e4"`).
pub fn square_name(point: BoardPoint) -> BoardResult<String> {
    let file_char = file_letter(point.x)
        .filter(|_| point.y >= 0)
        .ok_or_else(|| BoardError::InvalidSquareName(point.to_string()))?;
    Ok(format!("{file_char}{}", point.y as i64 + 1))
}

/// Coordinate of a named square (for example `"e4"` -> `(4, 3)`).
pub fn point_from_square_name(name: &str) -> BoardResult<BoardPoint> {
    let invalid = || BoardError::InvalidSquareName(name.to_owned());
    let mut chars = name.chars();
    let file = chars.next().ok_or_else(invalid)?;
    if !file.is_ascii_lowercase() {
        return Err(invalid());
    }

    let rank_text = chars.as_str();
    if rank_text.is_empty() || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let rank: i32 = rank_text.parse().map_err(|_| invalid())?;
    if rank < 1 {
        return Err(invalid());
    }

    Ok(BoardPoint::new((file as u8 - b'a') as i32, rank - 1))
}
