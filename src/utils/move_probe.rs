//! Seeded random move sampling.
//!
//! Draws `(start, end)` pairs from a seeded `StdRng` and runs them through
//! the validator, tallying verdicts. Useful for eyeballing a position and
//! for exercising validator invariants over many inputs.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::coordinate::{Coordinate, BOARD_HEIGHT, BOARD_WIDTH};
use crate::move_validation::move_validator::{MoveRejection, MoveVerdict};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub samples: usize,
    pub quiet: usize,
    pub captures: usize,
    pub empty_start: usize,
    pub invalid_pattern: usize,
    pub blocked: usize,
    pub own_piece: usize,
    pub path_exhausted: usize,
}

impl ProbeReport {
    fn record(&mut self, verdict: MoveVerdict) {
        self.samples += 1;
        match verdict {
            MoveVerdict::Quiet => self.quiet += 1,
            MoveVerdict::Capture(_) => self.captures += 1,
            MoveVerdict::Rejected(MoveRejection::EmptyStartSquare) => self.empty_start += 1,
            MoveVerdict::Rejected(MoveRejection::InvalidPattern(_)) => self.invalid_pattern += 1,
            MoveVerdict::Rejected(MoveRejection::Blocked { .. }) => self.blocked += 1,
            MoveVerdict::Rejected(MoveRejection::OwnPieceAtDestination) => self.own_piece += 1,
            MoveVerdict::Rejected(MoveRejection::PathExhausted) => self.path_exhausted += 1,
        }
    }

    pub fn legal(&self) -> usize {
        self.quiet + self.captures
    }

    pub fn report(&self) -> String {
        format!(
            "samples={} legal={} quiet={} captures={} empty_start={} invalid_pattern={} blocked={} own_piece={} path_exhausted={}",
            self.samples,
            self.legal(),
            self.quiet,
            self.captures,
            self.empty_start,
            self.invalid_pattern,
            self.blocked,
            self.own_piece,
            self.path_exhausted
        )
    }
}

fn random_coordinate(rng: &mut StdRng) -> Option<Coordinate> {
    Coordinate::from_indices(
        rng.random_range(0..BOARD_WIDTH),
        rng.random_range(0..BOARD_HEIGHT),
    )
}

/// `count` seeded random `(start, end)` pairs.
pub fn random_move_pairs(seed: u64, count: usize) -> Vec<(Coordinate, Coordinate)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        if let (Some(start), Some(end)) = (random_coordinate(&mut rng), random_coordinate(&mut rng)) {
            pairs.push((start, end));
        }
    }
    pairs
}

/// Random `(start, end)` pairs whose start square is occupied.
///
/// Returns an empty list for an empty board.
pub fn random_occupied_move_pairs(
    board: &Board,
    seed: u64,
    count: usize,
) -> Vec<(Coordinate, Coordinate)> {
    let occupied: Vec<Coordinate> = board.pieces().map(|(coordinate, _)| coordinate).collect();
    if occupied.is_empty() {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let start = occupied[rng.random_range(0..occupied.len())];
        if let Some(end) = random_coordinate(&mut rng) {
            pairs.push((start, end));
        }
    }
    pairs
}

/// Validate `count` random moves of pieces on `board`.
pub fn probe_board(board: &Board, seed: u64, count: usize) -> ProbeReport {
    let mut report = ProbeReport::default();
    for (start, end) in random_occupied_move_pairs(board, seed, count) {
        report.record(board.check_move(start, end));
    }
    log::debug!("probe seed={seed}: {}", report.report());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::scenario_board;
    use crate::moves::movement_pattern::MovementPattern;

    #[test]
    fn pairs_are_reproducible_per_seed() {
        assert_eq!(random_move_pairs(7, 32), random_move_pairs(7, 32));
        assert_ne!(random_move_pairs(7, 32), random_move_pairs(8, 32));
        assert_eq!(random_move_pairs(7, 32).len(), 32);
    }

    #[test]
    fn probe_is_deterministic_and_side_effect_free() {
        let board = scenario_board().expect("scenario should build");
        let before = board.clone();

        let first = probe_board(&board, 42, 500);
        let second = probe_board(&board, 42, 500);

        assert_eq!(first, second);
        assert_eq!(first.samples, 500);
        assert_eq!(first.empty_start, 0);
        assert_eq!(first.path_exhausted, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn empty_board_probe_has_no_samples() {
        assert_eq!(probe_board(&Board::new(), 1, 10).samples, 0);
    }

    #[test]
    fn random_paths_never_contain_start_and_end_at_destination() {
        let board = scenario_board().expect("scenario should build");
        for (start, end) in random_occupied_move_pairs(&board, 3, 1_000) {
            let Some(piece) = board.piece_at(start) else {
                continue;
            };
            let path = piece.kind.movement().generate_path(start, end);
            if let Some(last) = path.last() {
                assert_eq!(*last, end);
                assert!(!path.contains(&start));
            }
        }
    }

    #[test]
    fn random_moves_on_empty_squares_are_rejected() {
        let board = scenario_board().expect("scenario should build");
        for (start, end) in random_move_pairs(11, 500) {
            if board.piece_at(start).is_none() {
                assert_eq!(
                    board.check_move(start, end),
                    MoveVerdict::Rejected(MoveRejection::EmptyStartSquare)
                );
            }
        }
    }
}
