//! Board geometry: algebraic coordinates and file/rank arithmetic.
//!
//! A `Coordinate` can only be built through validating constructors, so any
//! value of this type names one of the 64 squares. Files and ranks are stored
//! zero-based; the free functions below speak the one-based algebraic
//! convention (`a` = 1, rank 1 = 1).

use std::fmt;
use std::str::FromStr;

use crate::errors::BoardError;

pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 8;

/// True iff `file` is in `a..=h` and `rank` is in `1..=8`.
#[inline]
pub fn coordinate_valid(file: char, rank: u8) -> bool {
    file_index(file).is_some() && (1..=BOARD_HEIGHT).contains(&rank)
}

/// One-based index of a file letter (`'a'` -> 1, `'h'` -> 8).
#[inline]
pub fn file_index(file: char) -> Option<u8> {
    if ('a'..='h').contains(&file) {
        Some(file as u8 - b'a' + 1)
    } else {
        None
    }
}

/// Inverse of [`file_index`].
#[inline]
pub fn file_letter(index: u8) -> Option<char> {
    if (1..=BOARD_WIDTH).contains(&index) {
        Some(char::from(b'a' + index - 1))
    } else {
        None
    }
}

/// A square on the board. Ordering is by file, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    file: u8,
    rank: u8,
}

impl Coordinate {
    /// Build from an algebraic file letter and a one-based rank.
    pub fn new(file: char, rank: u8) -> Result<Self, BoardError> {
        if !coordinate_valid(file, rank) {
            return Err(BoardError::InvalidCoordinate { file, rank });
        }
        let file_idx = file as u8 - b'a';
        Ok(Self {
            file: file_idx,
            rank: rank - 1,
        })
    }

    /// Build from zero-based indices, `None` if either is off the board.
    #[inline]
    pub const fn from_indices(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_WIDTH && rank < BOARD_HEIGHT {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Zero-based file index (`a` = 0).
    #[inline]
    pub const fn file_idx(self) -> u8 {
        self.file
    }

    /// Zero-based rank index (rank 1 = 0).
    #[inline]
    pub const fn rank_idx(self) -> u8 {
        self.rank
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file)
    }

    /// One-based rank number as written in algebraic notation.
    #[inline]
    pub const fn rank_number(self) -> u8 {
        self.rank + 1
    }

    /// Signed `(d_file, d_rank)` from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Coordinate) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }

    /// Shift by a file and rank offset, `None` if the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if file < 0 || rank < 0 {
            return None;
        }
        Self::from_indices(file as u8, rank as u8)
    }

    /// All 64 coordinates, a1, a2, ... h8.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_WIDTH)
            .flat_map(|file| (0..BOARD_HEIGHT).map(move |rank| Coordinate { file, rank }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let file = chars
            .next()
            .ok_or_else(|| BoardError::InvalidAlgebraic(s.to_owned()))?;
        let rank: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| BoardError::InvalidAlgebraic(s.to_owned()))?;
        Coordinate::new(file.to_ascii_lowercase(), rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_covers_board_edges() {
        assert!(coordinate_valid('a', 1));
        assert!(coordinate_valid('h', 8));
        assert!(!coordinate_valid('i', 1));
        assert!(!coordinate_valid('a', 0));
        assert!(!coordinate_valid('a', 9));
        assert!(!coordinate_valid('A', 1));
    }

    #[test]
    fn file_index_and_letter_are_inverse() {
        for index in 1..=8 {
            let letter = file_letter(index).expect("index in range");
            assert_eq!(file_index(letter), Some(index));
        }
        assert_eq!(file_index('c'), Some(3));
        assert_eq!(file_letter(0), None);
        assert_eq!(file_letter(9), None);
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        assert_eq!(
            Coordinate::new('z', 3),
            Err(BoardError::InvalidCoordinate { file: 'z', rank: 3 })
        );
        assert!(Coordinate::new('a', 9).is_err());
    }

    #[test]
    fn parse_and_display_algebraic() {
        let c3: Coordinate = "c3".parse().expect("c3 should parse");
        assert_eq!(c3.file_idx(), 2);
        assert_eq!(c3.rank_idx(), 2);
        assert_eq!(c3.to_string(), "c3");
        assert!("c".parse::<Coordinate>().is_err());
        assert!("c10".parse::<Coordinate>().is_err());
        assert!("j4".parse::<Coordinate>().is_err());
    }

    #[test]
    fn ordering_is_file_then_rank() {
        let a5: Coordinate = "a5".parse().expect("a5 should parse");
        let c3: Coordinate = "c3".parse().expect("c3 should parse");
        let c4: Coordinate = "c4".parse().expect("c4 should parse");
        assert!(a5 < c3);
        assert!(c3 < c4);
    }

    #[test]
    fn offset_stops_at_board_edge() {
        let h8: Coordinate = "h8".parse().expect("h8 should parse");
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(-1, -1).map(|c| c.to_string()), Some("g7".to_owned()));
        assert_eq!(Coordinate::all().count(), 64);
    }
}
