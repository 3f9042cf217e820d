//! Canonical positions and the literal acceptance cases for them.
//!
//! The scenario position is: white pawns on a5 and d3, white bishop on c3,
//! black pawn on f6, black rook on d6.

use crate::errors::BoardError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::coordinate::Coordinate;

/// Scenario position as a placement string (FEN board field).
pub const SCENARIO_PLACEMENT: &str = "8/8/3r1p2/P7/8/2BP4/8/8";

/// A literal `(start, end)` query with its expected validator answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptanceCase {
    pub start: &'static str,
    pub end: &'static str,
    pub expected: bool,
    pub description: &'static str,
}

const fn case(
    start: &'static str,
    end: &'static str,
    expected: bool,
    description: &'static str,
) -> AcceptanceCase {
    AcceptanceCase {
        start,
        end,
        expected,
        description,
    }
}

pub const SCENARIO_CASES: [AcceptanceCase; 17] = [
    case("c3", "e1", true, "bishop moves down right"),
    case("c3", "b4", true, "bishop moves up left"),
    case("c3", "a1", true, "bishop moves down left"),
    case("c3", "e5", true, "bishop moves up right"),
    case("c3", "h5", false, "bishop cannot move off the diagonal"),
    case("c3", "a5", false, "bishop cannot land on its own piece"),
    case("c3", "f6", true, "bishop captures an opposing piece"),
    case("c3", "g7", false, "bishop cannot jump over pieces"),
    case("c3", "h4", false, "bishop cannot move off the diagonal"),
    case("d6", "a6", true, "rook moves left"),
    case("d6", "d4", true, "rook moves down"),
    case("d6", "e6", true, "rook moves right"),
    case("d6", "d8", true, "rook moves up"),
    case("d6", "c2", false, "rook must move along a file or rank"),
    case("d6", "f6", false, "rook cannot land on its own piece"),
    case("d6", "d3", true, "rook captures an opposing piece"),
    case("d6", "d1", false, "rook cannot jump over pieces"),
];

/// Build the scenario position piece by piece.
pub fn scenario_board() -> Result<Board, BoardError> {
    let mut board = Board::new();
    board.set_piece(Piece::pawn(Color::White), Coordinate::new('a', 5)?);
    board.set_piece(Piece::pawn(Color::White), Coordinate::new('d', 3)?);
    board.set_piece(Piece::bishop(Color::White), Coordinate::new('c', 3)?);
    board.set_piece(Piece::pawn(Color::Black), Coordinate::new('f', 6)?);
    board.set_piece(Piece::rook(Color::Black), Coordinate::new('d', 6)?);
    Ok(board)
}
