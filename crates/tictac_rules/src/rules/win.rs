//! Win detection logic for tic-tac-toe.

use crate::lines::Line;
use crate::types::{Board, Mark};
use tracing::instrument;

/// Returns every line fully held by `mark`, in table order.
#[instrument(skip(board))]
pub fn lines_for(mark: Mark, board: &Board) -> Vec<Line> {
    Line::ALL
        .into_iter()
        .filter(|line| holds(mark, board, line))
        .collect()
}

/// Returns the first line (table order) fully held by `mark`.
pub fn first_line(mark: Mark, board: &Board) -> Option<Line> {
    Line::ALL.into_iter().find(|line| holds(mark, board, line))
}

/// Returns true if `mark` holds at least one line.
pub fn has_line(mark: Mark, board: &Board) -> bool {
    first_line(mark, board).is_some()
}

fn holds(mark: Mark, board: &Board, line: &Line) -> bool {
    line.cells()
        .iter()
        .all(|&i| board.cells()[i].holds(mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_on_empty_board() {
        let board = Board::new();
        assert!(lines_for(Mark::X, &board).is_empty());
        assert!(!has_line(Mark::O, &board));
    }

    #[test]
    fn test_top_row() {
        let board = Board::parse("XXX.OO...").unwrap();
        assert_eq!(lines_for(Mark::X, &board), vec![Line::ALL[0]]);
        assert!(!has_line(Mark::O, &board));
    }

    #[test]
    fn test_diagonal() {
        let board = Board::parse("O.X.OX..O").unwrap();
        assert_eq!(first_line(Mark::O, &board), Some(Line::ALL[6]));
    }

    #[test]
    fn test_incomplete_line() {
        let board = Board::parse("XX.......").unwrap();
        assert_eq!(first_line(Mark::X, &board), None);
    }

    #[test]
    fn test_multiple_lines_in_table_order() {
        // Row 1 and column 1 both held by X.
        let board = Board::parse("XXXXOOXO.").unwrap();
        let lines = lines_for(Mark::X, &board);
        assert_eq!(lines, vec![Line::ALL[0], Line::ALL[3]]);
        assert_eq!(first_line(Mark::X, &board), Some(Line::ALL[0]));
    }
}
