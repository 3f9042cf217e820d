use crate::game_state::coordinate::Coordinate;
use crate::moves::movement_pattern::{sliding_segment, MovementPattern};

pub struct RookMoves;

/// True iff `start` and `end` are distinct squares sharing a file or rank.
#[inline]
pub fn is_straight(start: Coordinate, end: Coordinate) -> bool {
    let (d_file, d_rank) = start.delta_to(end);
    (d_file == 0) != (d_rank == 0)
}

impl MovementPattern for RookMoves {
    fn generate_path(&self, start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        if !is_straight(start, end) {
            log::trace!("rook {start}-{end}: not along a file or rank");
            return Vec::new();
        }
        sliding_segment(start, end)
    }
}
