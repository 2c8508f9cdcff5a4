//! Crate root module declarations for the Plum rules engine.
//!
//! Exposes the board model, the legality and attack-detection engine, the
//! game session and the notation helpers under stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_validation;
    pub mod move_generator;
    pub mod perft;
    pub mod pin_detector;
    pub mod ray_scanner;
}

pub mod session {
    pub mod game;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
