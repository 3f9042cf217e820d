//! Applying validated moves.
//!
//! Kept apart from validation: `check_move` only answers, `apply_move`
//! detaches the piece from its start square and attaches it at the
//! destination once the validator has accepted the move.

use crate::errors::BoardError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::game_state::coordinate::Coordinate;
use crate::move_validation::move_validator::{check_move, MoveRejection, MoveVerdict};

/// A move that has been carried out on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub start: Coordinate,
    pub end: Coordinate,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

/// Validate and perform a move. The board is left unchanged on error.
pub fn apply_move(
    board: &mut Board,
    start: Coordinate,
    end: Coordinate,
) -> Result<AppliedMove, BoardError> {
    let captured = match check_move(board, start, end) {
        MoveVerdict::Quiet => None,
        MoveVerdict::Capture(piece) => Some(piece),
        MoveVerdict::Rejected(reason) => {
            return Err(BoardError::IllegalMove { start, end, reason });
        }
    };

    // A legal verdict implies a mover on `start`.
    let Some(moved) = board.clear_square(start) else {
        return Err(BoardError::IllegalMove {
            start,
            end,
            reason: MoveRejection::EmptyStartSquare,
        });
    };
    board.set_piece(moved, end);

    log::info!(
        "{} {} {start}-{end}{}",
        moved.color.name(),
        moved.kind.name(),
        if captured.is_some() { " (capture)" } else { "" }
    );

    Ok(AppliedMove {
        start,
        end,
        moved,
        captured,
    })
}

impl Board {
    pub fn apply_move(
        &mut self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<AppliedMove, BoardError> {
        apply_move(self, start, end)
    }
}
