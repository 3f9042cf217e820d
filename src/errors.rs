//! Errors used throughout the crate.
//!
//! `BoardError` covers precondition failures: malformed coordinates,
//! malformed placement strings, configuration problems and attempts to apply
//! a move the validator rejected. A move that is merely illegal for the piece
//! is not an error for `Board::try_move`; it is reported as `false` (or a
//! `MoveVerdict::Rejected`) and only becomes a `BoardError` when the caller
//! asks for the move to be applied.

use thiserror::Error;

use crate::game_state::coordinate::Coordinate;
use crate::move_validation::move_validator::MoveRejection;

/// Unified error type for board construction, parsing and move application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// File outside `a..=h` or rank outside `1..=8`.
    #[error("coordinate out of range: file '{file}', rank {rank}")]
    InvalidCoordinate { file: char, rank: u8 },

    /// A square string such as `"c3"` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A placement string (FEN board field) was malformed.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// `apply_move` was asked to perform a move the validator rejects.
    #[error("illegal move {start}-{end}: {reason}")]
    IllegalMove {
        start: Coordinate,
        end: Coordinate,
        reason: MoveRejection,
    },

    /// The configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
