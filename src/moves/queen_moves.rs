use crate::game_state::coordinate::Coordinate;
use crate::moves::bishop_moves::BishopMoves;
use crate::moves::movement_pattern::MovementPattern;
use crate::moves::rook_moves::{is_straight, RookMoves};

/// Queen paths are the union of rook and bishop lines.
pub struct QueenMoves;

impl MovementPattern for QueenMoves {
    fn generate_path(&self, start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        if is_straight(start, end) {
            RookMoves.generate_path(start, end)
        } else {
            BishopMoves.generate_path(start, end)
        }
    }
}
