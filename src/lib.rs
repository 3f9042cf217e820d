//! Crate root module declarations.
//!
//! Board model and geometry live in `game_state`, per-kind movement patterns
//! in `moves`, the path-walking validator and move application in
//! `move_validation`, and parsing/rendering/probing helpers in `utils`.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinate;
    pub mod square;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod movement_pattern;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_validation {
    pub mod move_apply;
    pub mod move_validator;
}

pub mod utils {
    pub mod move_probe;
    pub mod placement_parser;
    pub mod render_board;
}
