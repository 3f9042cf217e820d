//! The 8×8 board.
//!
//! `Board` owns all 64 squares and exposes raw placement. Move validation
//! lives in `move_validation::move_validator` and move application in
//! `move_validation::move_apply`; both add methods to `Board` from there.

use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::coordinate::{Coordinate, BOARD_HEIGHT, BOARD_WIDTH};
use crate::game_state::square::Square;

const SQUARE_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Board state: one `Square` per coordinate, at most one piece per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // Indexed file-major: a1, a2, .., a8, b1, ..
    squares: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with shaded squares.
    pub fn new() -> Self {
        let squares: Vec<Square> = Coordinate::all().map(Square::new).collect();
        debug_assert_eq!(squares.len(), SQUARE_COUNT);
        Self { squares }
    }

    #[inline]
    fn index(coordinate: Coordinate) -> usize {
        coordinate.file_idx() as usize * BOARD_HEIGHT as usize + coordinate.rank_idx() as usize
    }

    #[inline]
    pub fn square(&self, coordinate: Coordinate) -> &Square {
        &self.squares[Self::index(coordinate)]
    }

    #[inline]
    pub(crate) fn square_mut(&mut self, coordinate: Coordinate) -> &mut Square {
        &mut self.squares[Self::index(coordinate)]
    }

    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.square(coordinate).piece()
    }

    /// Place a piece, replacing any occupant. No legality check.
    pub fn set_piece(&mut self, piece: Piece, coordinate: Coordinate) {
        self.square_mut(coordinate).set_piece(piece);
    }

    /// Remove and return the occupant of `coordinate`.
    pub fn clear_square(&mut self, coordinate: Coordinate) -> Option<Piece> {
        self.square_mut(coordinate).take_piece()
    }

    /// Every occupied square with its piece, in file-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares
            .iter()
            .filter_map(|square| square.piece().map(|piece| (square.coordinate(), piece)))
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, Shade};
    use crate::game_state::coordinate::Coordinate;

    fn at(square: &str) -> Coordinate {
        square.parse().expect("test square should parse")
    }

    #[test]
    fn new_board_is_empty_with_one_square_per_coordinate() {
        let board = Board::new();
        for coordinate in Coordinate::all() {
            assert_eq!(board.square(coordinate).coordinate(), coordinate);
            assert_eq!(board.piece_at(coordinate), None);
        }
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn squares_carry_alternating_shades() {
        let board = Board::new();
        assert_eq!(board.square(at("a1")).shade(), Shade::Dark);
        assert_eq!(board.square(at("a2")).shade(), Shade::Light);
        assert_eq!(board.square(at("b1")).shade(), Shade::Light);
    }

    #[test]
    fn set_and_clear_pieces() {
        let mut board = Board::new();
        board.set_piece(Piece::rook(Color::Black), at("d6"));
        board.set_piece(Piece::pawn(Color::White), at("a5"));

        assert_eq!(board.piece_at(at("d6")), Some(Piece::rook(Color::Black)));
        assert_eq!(board.count_pieces(Color::White), 1);
        assert_eq!(board.count_pieces(Color::Black), 1);

        assert_eq!(board.clear_square(at("d6")), Some(Piece::rook(Color::Black)));
        assert_eq!(board.piece_at(at("d6")), None);
        assert_eq!(board.clear_square(at("d6")), None);
    }
}
