//! Per-kind movement patterns.
//!
//! A pattern turns a `(start, end)` pair into the ordered list of squares a
//! piece would cross: the square next to `start` first, `end` last, `start`
//! itself never included. An empty list means the kind cannot make that
//! move at all. Occupancy is not consulted here; the validator resolves
//! blocking and captures afterwards.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinate::Coordinate;
use crate::moves::bishop_moves::BishopMoves;
use crate::moves::queen_moves::QueenMoves;
use crate::moves::rook_moves::RookMoves;

pub trait MovementPattern: Send + Sync {
    fn generate_path(&self, start: Coordinate, end: Coordinate) -> Vec<Coordinate>;
}

/// Pattern for kinds without movement rules: never yields a path.
pub struct NoMovement;

impl MovementPattern for NoMovement {
    fn generate_path(&self, _start: Coordinate, _end: Coordinate) -> Vec<Coordinate> {
        Vec::new()
    }
}

impl PieceKind {
    /// The movement pattern for this kind.
    pub fn movement(self) -> &'static dyn MovementPattern {
        match self {
            PieceKind::Bishop => &BishopMoves,
            PieceKind::Rook => &RookMoves,
            PieceKind::Queen => &QueenMoves,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &NoMovement,
        }
    }
}

/// Straight-line segment between two endpoints, oriented from `start`.
///
/// The segment is collected from the lower endpoint (file, then rank) to the
/// higher one, reversed when `start` is the higher endpoint, and then the
/// leading `start` is dropped. Callers must already know the endpoints lie
/// on one rank, file or diagonal.
pub(crate) fn sliding_segment(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    if start == end {
        return Vec::new();
    }

    let (low, high) = if start < end { (start, end) } else { (end, start) };
    let (d_file, d_rank) = low.delta_to(high);
    let (file_step, rank_step) = (d_file.signum(), d_rank.signum());
    let steps = d_file.unsigned_abs().max(d_rank.unsigned_abs());

    let mut squares = Vec::with_capacity(steps as usize + 1);
    let mut current = Some(low);
    while let Some(square) = current {
        squares.push(square);
        if square == high {
            break;
        }
        current = square.offset(file_step, rank_step);
    }

    if squares.first() == Some(&end) {
        squares.reverse();
    }

    squares.into_iter().skip(1).collect()
}
