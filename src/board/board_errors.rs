//! Errors used throughout the board crate.
//!
//! `BoardError` is the single error type returned by board bookkeeping, move
//! generation helpers and square-name parsing. Every variant is a local,
//! recoverable validation failure: nothing is retried and nothing is clamped.

use thiserror::Error;

use crate::board::board_point::BoardPoint;
use crate::board::piece_id::PieceId;

/// Unified error type for board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The id is zero or was never issued by this board.
    #[error("invalid piece id {0}")]
    InvalidPieceId(PieceId),

    /// The coordinate lies outside `[0, width) x [0, height)`.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(BoardPoint),

    /// The piece exists but currently occupies no square (captured or never placed).
    #[error("piece {0} is not on the board")]
    NotPlaced(PieceId),

    /// A new piece was placed on a square that already holds a piece.
    #[error("square {point} is already occupied by piece {occupant}")]
    SquareOccupied { point: BoardPoint, occupant: PieceId },

    /// A board was requested with a zero-sized side.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    /// A square name could not be parsed or produced.
    ///
    /// Payload: the offending text or coordinate for diagnostics.
    #[error("invalid square name: {0}")]
    InvalidSquareName(String),
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
