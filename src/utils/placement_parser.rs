//! Placement strings: the board field of FEN.
//!
//! Ranks are listed from 8 down to 1 and separated by `/`. Uppercase letters
//! are white pieces, lowercase black, digits count empty squares. Only piece
//! placement is read; side to move and the other FEN fields have no meaning
//! for this board.

use crate::errors::BoardError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::coordinate::{Coordinate, BOARD_HEIGHT, BOARD_WIDTH};

pub fn parse_placement(placement: &str) -> Result<Board, BoardError> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != BOARD_HEIGHT as usize {
        return Err(BoardError::InvalidPlacement(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new();

    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = BOARD_HEIGHT - 1 - row as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(BoardError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file = file.saturating_add(empty_count as u8);
                continue;
            }

            let piece = piece_from_char(ch).ok_or_else(|| {
                BoardError::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;
            let coordinate = Coordinate::from_indices(file, rank).ok_or_else(|| {
                BoardError::InvalidPlacement(format!("rank {} has too many files", rank + 1))
            })?;
            board.set_piece(piece, coordinate);
            file += 1;
        }

        if file != BOARD_WIDTH {
            return Err(BoardError::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                rank + 1
            )));
        }
    }

    Ok(board)
}

/// Inverse of [`parse_placement`].
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_HEIGHT).rev() {
        let mut empty_count = 0u8;

        for file in 0..BOARD_WIDTH {
            let piece = Coordinate::from_indices(file, rank).and_then(|c| board.piece_at(c));
            match piece {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };
    PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
}

fn piece_to_char(piece: Piece) -> char {
    match piece.color {
        Color::White => piece.kind.letter().to_ascii_uppercase(),
        Color::Black => piece.kind.letter(),
    }
}
