//! Command-line configuration for the demo binary.

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardVariant {
    /// 8x8 international chess with the standard opening.
    Chess,
    /// Empty 9x10 xiangqi board.
    Xiangqi,
}

/// Walk through board setup, candidate moves and a short game.
///
/// Logging is controlled with `RUST_LOG` (for example `RUST_LOG=plum_board=debug`).
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "plum_board", version, about)]
pub struct DemoConfig {
    /// Board variant to show.
    #[arg(long, value_enum, default_value_t = BoardVariant::Chess)]
    pub variant: BoardVariant,

    /// Number of random plies to play after the scripted moves.
    #[arg(long, default_value_t = 0)]
    pub random_plies: u32,

    /// Seed for the random playout.
    #[arg(long, default_value_t = 7)]
    pub seed: u64,

    /// Do not replay fool's mate.
    #[arg(long)]
    pub skip_fools_mate: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            variant: BoardVariant::Chess,
            random_plies: 0,
            seed: 7,
            skip_fools_mate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn no_arguments_gives_defaults() {
        let config = DemoConfig::try_parse_from(["plum_board"]).expect("defaults parse");
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn parses_all_flags() {
        let config = DemoConfig::try_parse_from([
            "plum_board",
            "--variant",
            "xiangqi",
            "--random-plies",
            "12",
            "--seed",
            "99",
            "--skip-fools-mate",
        ])
        .expect("flags parse");
        assert_eq!(config.variant, BoardVariant::Xiangqi);
        assert_eq!(config.random_plies, 12);
        assert_eq!(config.seed, 99);
        assert!(config.skip_fools_mate);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(DemoConfig::try_parse_from(["plum_board", "--variant", "shogi"]).is_err());
    }
}
