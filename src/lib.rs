//! Crate root module declarations for the chess notary.
//!
//! Exposes the board model, legal move generation, notation resolution, game
//! record parsing and the request-level services so the binary, benches and
//! external tooling can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinate_move;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod perft;
}

pub mod notation {
    pub mod san_resolver;
}

pub mod service {
    pub mod game_source;
    pub mod game_stats;
    pub mod make_move;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod render_board;
}
