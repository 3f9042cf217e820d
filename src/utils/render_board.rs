//! Plain-text board dump for terminals and logs.
//!
//! One line per rank from 8 down to 1: `"<rank>: "` followed by `[x]` per
//! file, where `x` is the piece letter, or `[ ]` for an empty square.
//! Purely presentational; validation never reads it.

use crate::game_state::board::Board;
use crate::game_state::coordinate::{Coordinate, BOARD_HEIGHT, BOARD_WIDTH};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_HEIGHT).rev() {
        out.push(char::from(b'1' + rank));
        out.push_str(": ");

        for file in 0..BOARD_WIDTH {
            out.push('[');
            match Coordinate::from_indices(file, rank).and_then(|c| board.piece_at(c)) {
                Some(piece) => out.push(piece.kind.letter()),
                None => out.push(' '),
            }
            out.push(']');
        }

        if rank > 0 {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::scenario_board;

    #[test]
    fn render_scenario_board() {
        let board = scenario_board().expect("scenario should build");
        let rendered = render_board(&board);
        println!("\n{rendered}");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "8: [ ][ ][ ][ ][ ][ ][ ][ ]");
        assert_eq!(lines[2], "6: [ ][ ][ ][r][ ][p][ ][ ]");
        assert_eq!(lines[3], "5: [p][ ][ ][ ][ ][ ][ ][ ]");
        assert_eq!(lines[5], "3: [ ][ ][b][p][ ][ ][ ][ ]");
    }

    #[test]
    fn render_empty_board() {
        let rendered = render_board(&Board::new());
        assert!(rendered.lines().all(|line| line.ends_with("[ ][ ][ ][ ][ ][ ][ ][ ]")));
    }
}
