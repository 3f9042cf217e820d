//! Core piece and square-shade types shared by the board, the movement
//! patterns and the validator.

use crate::game_state::coordinate::Coordinate;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// Piece kind. Only the sliding kinds carry a movement pattern; the rest
/// resolve to a pattern that never produces a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Lowercase letter used by placement strings and the text renderer.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| kind.letter() == letter.to_ascii_lowercase())
    }
}

/// A piece: immutable color and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceKind::Pawn)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(color, PieceKind::Bishop)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(color, PieceKind::Rook)
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(color, PieceKind::Queen)
    }
}

/// Cosmetic square shading; has no effect on legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// a1 is dark, neighbours alternate.
    #[inline]
    pub const fn of(coordinate: Coordinate) -> Self {
        if (coordinate.file_idx() + coordinate.rank_idx()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}
