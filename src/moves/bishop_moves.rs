//! Bishop path generation: diagonals only.

use crate::game_state::coordinate::Coordinate;
use crate::moves::movement_pattern::{sliding_segment, MovementPattern};

pub struct BishopMoves;

/// True iff `start` and `end` are distinct squares on one diagonal.
#[inline]
pub fn is_diagonal(start: Coordinate, end: Coordinate) -> bool {
    let (d_file, d_rank) = start.delta_to(end);
    d_file != 0 && d_file.abs() == d_rank.abs()
}

impl MovementPattern for BishopMoves {
    fn generate_path(&self, start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
        if !is_diagonal(start, end) {
            log::trace!("bishop {start}-{end}: not a diagonal");
            return Vec::new();
        }
        sliding_segment(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(square: &str) -> Coordinate {
        square.parse().expect("test square should parse")
    }

    fn path(start: &str, end: &str) -> Vec<String> {
        BishopMoves
            .generate_path(at(start), at(end))
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn bishop_paths_cover_all_four_diagonals() {
        assert_eq!(path("c3", "e1"), ["d2", "e1"]);
        assert_eq!(path("c3", "b4"), ["b4"]);
        assert_eq!(path("c3", "a1"), ["b2", "a1"]);
        assert_eq!(path("c3", "e5"), ["d4", "e5"]);
        assert_eq!(path("c3", "h8"), ["d4", "e5", "f6", "g7", "h8"]);
    }

    #[test]
    fn bishop_rejects_non_diagonal_and_zero_length() {
        assert!(path("c3", "h5").is_empty());
        assert!(path("c3", "h4").is_empty());
        assert!(path("c3", "c5").is_empty());
        assert!(path("c3", "c3").is_empty());
    }

    #[test]
    fn bishop_path_ends_at_destination_and_skips_start() {
        for start in Coordinate::all() {
            for end in Coordinate::all() {
                let squares = BishopMoves.generate_path(start, end);
                if squares.is_empty() {
                    continue;
                }
                assert_eq!(squares.last(), Some(&end));
                assert!(!squares.contains(&start));
                assert_eq!(squares.len() as i8, start.delta_to(end).0.abs());
            }
        }
    }
}
