//! Move validation: path walking with obstruction and capture rules.
//!
//! The occupying piece's movement pattern produces the squares between
//! `start` and `end` (destination last). A single walk over that path then
//! decides the move:
//!
//! - an occupied square before the destination blocks the move;
//! - an occupied destination is a capture when the occupant is the opposite
//!   color, otherwise the move is rejected;
//! - an empty destination is a quiet move.
//!
//! Validation never touches occupancy. See `move_apply` for the operation
//! that actually relocates a piece.

use std::fmt;

use crate::errors::BoardError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::coordinate::Coordinate;
use crate::moves::movement_pattern::MovementPattern;

/// Why a move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    /// There is no piece on the start square.
    EmptyStartSquare,
    /// The piece kind cannot move from start to end in any pattern.
    InvalidPattern(PieceKind),
    /// A piece stands on the path before the destination.
    Blocked { at: Coordinate },
    /// The destination holds a piece of the mover's own color.
    OwnPieceAtDestination,
    /// The path ended without reaching the destination.
    PathExhausted,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::EmptyStartSquare => write!(f, "no piece on the start square"),
            MoveRejection::InvalidPattern(kind) => {
                write!(f, "a {} cannot move that way", kind.name())
            }
            MoveRejection::Blocked { at } => write!(f, "path is blocked at {at}"),
            MoveRejection::OwnPieceAtDestination => {
                write!(f, "destination holds a piece of the same color")
            }
            MoveRejection::PathExhausted => write!(f, "path does not reach the destination"),
        }
    }
}

/// Outcome of validating one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    /// Legal move onto an empty square.
    Quiet,
    /// Legal move capturing the given piece on the destination.
    Capture(Piece),
    Rejected(MoveRejection),
}

impl MoveVerdict {
    #[inline]
    pub fn is_legal(self) -> bool {
        !matches!(self, MoveVerdict::Rejected(_))
    }
}

impl fmt::Display for MoveVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveVerdict::Quiet => write!(f, "legal"),
            MoveVerdict::Capture(piece) => {
                write!(f, "legal, captures {} {}", piece.color.name(), piece.kind.name())
            }
            MoveVerdict::Rejected(reason) => write!(f, "illegal: {reason}"),
        }
    }
}

/// Validate moving the piece on `start` to `end`.
pub fn check_move(board: &Board, start: Coordinate, end: Coordinate) -> MoveVerdict {
    let verdict = walk_path(board, start, end);
    log::debug!("{start}-{end}: {verdict}");
    verdict
}

fn walk_path(board: &Board, start: Coordinate, end: Coordinate) -> MoveVerdict {
    let Some(mover) = board.piece_at(start) else {
        return MoveVerdict::Rejected(MoveRejection::EmptyStartSquare);
    };

    let path = mover.kind.movement().generate_path(start, end);
    if path.is_empty() {
        return MoveVerdict::Rejected(MoveRejection::InvalidPattern(mover.kind));
    }

    for square in path {
        let is_destination = square == end;
        match board.piece_at(square) {
            Some(occupant) => {
                log::trace!("{start}-{end}: {square} occupied by {occupant:?}");
                if !is_destination {
                    return MoveVerdict::Rejected(MoveRejection::Blocked { at: square });
                }
                if occupant.color == mover.color.opposite() {
                    return MoveVerdict::Capture(occupant);
                }
                return MoveVerdict::Rejected(MoveRejection::OwnPieceAtDestination);
            }
            None if is_destination => return MoveVerdict::Quiet,
            None => {
                log::trace!("{start}-{end}: {square} empty");
            }
        }
    }

    MoveVerdict::Rejected(MoveRejection::PathExhausted)
}

/// All squares the piece on `start` may legally move to, a1 first.
pub fn legal_destinations(board: &Board, start: Coordinate) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|&end| walk_path(board, start, end).is_legal())
        .collect()
}

impl Board {
    /// Validate a move without changing the board.
    pub fn check_move(&self, start: Coordinate, end: Coordinate) -> MoveVerdict {
        check_move(self, start, end)
    }

    /// True iff the piece on `start` may move to `end`.
    pub fn try_move(&self, start: Coordinate, end: Coordinate) -> bool {
        self.check_move(start, end).is_legal()
    }

    /// `try_move` for algebraic squares; malformed or off-board squares are
    /// reported as errors rather than as an illegal move.
    pub fn try_move_algebraic(&self, start: &str, end: &str) -> Result<bool, BoardError> {
        let start: Coordinate = start.parse()?;
        let end: Coordinate = end.parse()?;
        Ok(self.try_move(start, end))
    }

    pub fn legal_destinations(&self, start: Coordinate) -> Vec<Coordinate> {
        legal_destinations(self, start)
    }
}
