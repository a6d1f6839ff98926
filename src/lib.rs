//! Crate root module declarations for the Plum Board project.
//!
//! This file exposes the abstract grid board, movement rules, ray-walk move
//! generation, the chess opening setup, rendering helpers and the demo driver
//! so binaries, tests, and benchmarks can import stable module paths.

pub mod board {
    pub mod board_errors;
    pub mod board_point;
    pub mod board_variants;
    pub mod game_board;
    pub mod piece_id;
}

pub mod moves {
    pub mod chess_rules;
    pub mod movement_rule;
}

pub mod move_generation {
    pub mod move_generator;
}

pub mod chess {
    pub mod chess_types;
    pub mod opening_setup;
}

pub mod utils {
    pub mod render_board;
    pub mod square_names;
}

pub mod demo {
    pub mod demo_config;
    pub mod demo_driver;
}
