//! Demo walkthrough behind the `plum_board` binary.
//!
//! Sets up the standard opening, lists every non-pawn piece's candidate
//! squares, replays fool's mate and optionally plays a seeded random playout.
//! Moves are not checked for king safety; the random playout just picks any
//! generated destination for the side to move.

use std::io::Write;

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;
use tracing::info;

use crate::board::board_errors::BoardError;
use crate::board::board_point::BoardPoint;
use crate::board::board_variants::{new_chess_board, new_xiangqi_board};
use crate::board::game_board::GameBoard;
use crate::board::piece_id::PieceId;
use crate::chess::chess_types::{Color, PieceKind};
use crate::chess::opening_setup::StandardOpening;
use crate::demo::demo_config::{BoardVariant, DemoConfig};
use crate::move_generation::move_generator::find_available_moves;
use crate::utils::render_board::{render_chess_board, render_xiangqi_board};
use crate::utils::square_names::{point_from_square_name, square_name};

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("failed writing demo output: {0}")]
    Io(#[from] std::io::Error),

    /// A scripted move referred to a square with no piece on it.
    #[error("no piece on {0}")]
    EmptySquare(String),
}

/// The shortest mating game: (from, to, caption).
const FOOLS_MATE: [(&str, &str, &str); 4] = [
    ("g2", "g4", "[Light] pawn g4"),
    ("e7", "e5", "[Dark] pawn e5"),
    ("f2", "f3", "[Light] pawn f3"),
    ("d8", "h4", "[Dark] queen h4 ++"),
];

/// A move chosen during the random playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub piece: PieceId,
    pub from: BoardPoint,
    pub to: BoardPoint,
    pub captured: Option<PieceId>,
}

pub fn run_demo(config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
    info!(?config, "starting demo");
    match config.variant {
        BoardVariant::Xiangqi => {
            let board: GameBoard<Color> = new_xiangqi_board();
            writeln!(out, "{}", render_xiangqi_board(&board))?;
            Ok(())
        }
        BoardVariant::Chess => run_chess_demo(config, out),
    }
}

fn run_chess_demo(config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let mut board = new_chess_board();
    writeln!(out, "{}\n", render_chess_board(&board))?;

    let opening = StandardOpening::set_up(&mut board)?;
    writeln!(out, "{}\n", render_chess_board(&board))?;

    write_candidate_moves(&board, &opening, out)?;

    if !config.skip_fools_mate {
        play_fools_mate(&mut board, out)?;
    }

    if config.random_plies > 0 {
        play_random_plies(&mut board, &opening, config, out)?;
    }
    Ok(())
}

fn write_candidate_moves(
    board: &GameBoard<Color>,
    opening: &StandardOpening,
    out: &mut impl Write,
) -> Result<(), DemoError> {
    for (id, kind) in opening.pieces() {
        if kind == PieceKind::Pawn {
            continue;
        }
        let Some(rule) = opening.rule_for(id) else {
            continue;
        };
        let names = find_available_moves(board, id, rule)
            .into_iter()
            .map(square_name)
            .collect::<Result<Vec<_>, _>>()?;
        writeln!(
            out,
            "{}{}: [{}]",
            board.name_of(id)?,
            square_name(board.locate(id)?)?,
            names.join(", ")
        )?;
    }
    writeln!(out)?;
    Ok(())
}

pub(crate) fn play_fools_mate(
    board: &mut GameBoard<Color>,
    out: &mut impl Write,
) -> Result<(), DemoError> {
    for (from, to, caption) in FOOLS_MATE {
        let piece = board.piece_at(point_from_square_name(from)?);
        if piece.is_none() {
            return Err(DemoError::EmptySquare(from.to_owned()));
        }
        board.move_piece(piece, point_from_square_name(to)?)?;
        writeln!(out, "{}\n{caption}\n", render_chess_board(board))?;
    }
    Ok(())
}

/// Pick and play one random candidate move for `side`. `None` when `side` cannot move.
pub fn play_random_move(
    board: &mut GameBoard<Color>,
    opening: &StandardOpening,
    side: Color,
    rng: &mut StdRng,
) -> Result<Option<PlayedMove>, BoardError> {
    let mut candidates = Vec::new();
    for piece in board.pieces_owned_by(&side) {
        let (Some(rule), Ok(from)) = (opening.rule_for(piece), board.locate(piece)) else {
            continue;
        };
        for to in find_available_moves(board, piece, rule) {
            candidates.push((piece, from, to));
        }
    }

    let Some(&(piece, from, to)) = candidates.choose(rng) else {
        return Ok(None);
    };
    let captured = board.move_piece(piece, to)?;
    Ok(Some(PlayedMove {
        piece,
        from,
        to,
        captured,
    }))
}

fn play_random_plies(
    board: &mut GameBoard<Color>,
    opening: &StandardOpening,
    config: &DemoConfig,
    out: &mut impl Write,
) -> Result<(), DemoError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut side = Color::Light;

    for ply in 1..=config.random_plies {
        let Some(played) = play_random_move(board, opening, side, &mut rng)? else {
            writeln!(out, "{side:?} has no candidate moves")?;
            break;
        };
        let mut line = format!(
            "{ply}. [{side:?}] {} {}-{}",
            board.name_of(played.piece)?,
            square_name(played.from)?,
            square_name(played.to)?
        );
        if let Some(captured) = played.captured {
            line.push_str(&format!(" x{}", board.name_of(captured)?));
        }
        writeln!(out, "{line}")?;
        side = side.opposite();
    }

    writeln!(out, "\n{}", render_chess_board(board))?;
    Ok(())
}
