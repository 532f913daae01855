//! Crate root module declarations for the Plum Chess rules engine.
//!
//! Exposes the board model and game session, per-piece move rules, legal
//! move generation and terminal-state classification, material scoring,
//! the move-suggestion engines, and text utilities (FEN, notation,
//! rendering, PGN export).

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod move_history;
    pub mod move_rejection;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal;
    pub mod terminal_state;
}

pub mod search {
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_game_state;
}
