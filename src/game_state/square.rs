use crate::game_state::chess_types::{Piece, Shade};
use crate::game_state::coordinate::Coordinate;

/// One board square: fixed coordinate and shade, optional occupant.
///
/// No legality checks happen here; callers decide what may be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    coordinate: Coordinate,
    shade: Shade,
    piece: Option<Piece>,
}

impl Square {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            shade: Shade::of(coordinate),
            piece: None,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    #[inline]
    pub fn shade(&self) -> Shade {
        self.shade
    }

    /// Overwrites whatever was here.
    #[inline]
    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    #[inline]
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    /// Detach the occupant, leaving the square empty.
    #[inline]
    pub fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
