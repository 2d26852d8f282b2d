use crate::game::board::Board;
use crate::game::direction::Direction;
use crate::game::merge_line::merge_line;

/// Result of sliding a board, before any tile is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// True iff at least one cell differs from the board the move started from.
    pub changed: bool,
}

/// Slide and merge every row (left/right) or column (up/down).
///
/// Columns are handled by transposing, and right/down by reversing each line
/// around `merge_line`, so all four directions share the one line primitive.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let moved = match direction {
        Direction::Left => shift_rows(board, false),
        Direction::Right => shift_rows(board, true),
        Direction::Up => shift_rows(&board.transpose(), false).transpose(),
        Direction::Down => shift_rows(&board.transpose(), true).transpose(),
    };

    MoveOutcome {
        changed: moved != *board,
        board: moved,
    }
}

fn shift_rows(board: &Board, reversed: bool) -> Board {
    let mut cells = board.cells;
    for row in cells.iter_mut() {
        if reversed {
            row.reverse();
            *row = merge_line(*row);
            row.reverse();
        } else {
            *row = merge_line(*row);
        }
    }
    Board { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::board_sum;

    fn mixed_board() -> Board {
        Board::from_rows([[2, 2, 4, 0], [0, 4, 4, 4], [8, 0, 8, 2], [2, 4, 2, 2]])
    }

    #[test]
    fn test_move_left_merges_first_row() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let outcome = apply_move(&board, Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.board.cells[0], [4, 0, 0, 0]);
        assert_eq!(board_sum(&outcome.board), 4);
    }

    #[test]
    fn test_move_right_reverses_around_merge() {
        let outcome = apply_move(&mixed_board(), Direction::Right);
        assert_eq!(outcome.board.cells[0], [0, 0, 4, 4]);
        assert_eq!(outcome.board.cells[1], [0, 0, 4, 8]);
        assert_eq!(outcome.board.cells[2], [0, 0, 16, 2]);
        assert_eq!(outcome.board.cells[3], [0, 2, 4, 4]);
    }

    #[test]
    fn test_move_up_and_down_act_on_columns() {
        let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 8]]);
        let up = apply_move(&board, Direction::Up).board;
        assert_eq!(up.transpose().cells[0], [4, 8, 0, 0]);
        assert_eq!(up.cells[0][3], 8);

        let down = apply_move(&board, Direction::Down).board;
        assert_eq!(down.transpose().cells[0], [0, 0, 4, 8]);
        assert_eq!(down.cells[3][3], 8);
    }

    #[test]
    fn test_left_is_mirror_of_right() {
        let board = mixed_board();
        let left = apply_move(&board, Direction::Left).board;
        let right_of_mirror = apply_move(&board.mirror(), Direction::Right).board;
        assert_eq!(left, right_of_mirror.mirror());
    }

    #[test]
    fn test_up_is_transpose_of_left() {
        let board = mixed_board();
        let up = apply_move(&board, Direction::Up).board;
        let left_of_transpose = apply_move(&board.transpose(), Direction::Left).board;
        assert_eq!(up, left_of_transpose.transpose());

        let down = apply_move(&board, Direction::Down).board;
        let right_of_transpose = apply_move(&board.transpose(), Direction::Right).board;
        assert_eq!(down, right_of_transpose.transpose());
    }

    #[test]
    fn test_move_never_loses_tile_mass() {
        let board = mixed_board();
        for direction in Direction::ALL {
            let outcome = apply_move(&board, direction);
            assert!(outcome.changed);
            assert_eq!(board_sum(&outcome.board), board_sum(&board));
        }
    }

    #[test]
    fn test_stuck_board_reports_no_change_in_every_direction() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        for direction in Direction::ALL {
            let outcome = apply_move(&board, direction);
            assert!(!outcome.changed, "{} should be a no-op", direction);
            assert_eq!(outcome.board, board);
        }
    }

    #[test]
    fn test_compacted_row_is_unchanged_by_left() {
        let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!apply_move(&board, Direction::Left).changed);
        assert!(apply_move(&board, Direction::Right).changed);
    }
}
