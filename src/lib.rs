//! Crate root module declarations for the Tulip Chess engine.
//!
//! Exposes the board model, the pseudo-legal rules and move generation, the
//! minimax search, the engine wrappers, the caller-facing game API, and the
//! notation/rendering helpers so binaries, tests, and benches can import
//! stable module paths.

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod interface {
    pub mod game_api;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod long_algebraic;
    pub mod render_game_state;
}
