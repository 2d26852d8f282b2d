use crate::game::apply_move::apply_move;
use crate::game::board::{Board, SIZE};
use crate::game::direction::Direction;
use crate::game::empty_positions::empty_positions;

/// True while the player can still change the board.
///
/// A board with an empty cell always has a move. A full board has one iff two
/// horizontally or vertically adjacent cells hold the same value.
pub fn has_moves(board: &Board) -> bool {
    if !empty_positions(board).is_empty() {
        return true;
    }

    let cells = &board.cells;
    (0..SIZE).any(|r| {
        (0..SIZE).any(|c| {
            let value = cells[r][c];
            (c + 1 < SIZE && cells[r][c + 1] == value) || (r + 1 < SIZE && cells[r + 1][c] == value)
        })
    })
}

/// Directions whose move would change the board.
pub fn legal_directions(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| apply_move(board, direction).changed)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::create_board_empty;

    #[test]
    fn test_checkerboard_has_no_moves() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!has_moves(&board));
        assert!(legal_directions(&board).is_empty());
    }

    #[test]
    fn test_empty_cell_means_moves() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]]);
        assert!(has_moves(&board));
    }

    #[test]
    fn test_full_board_with_horizontal_pair() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(has_moves(&board));
        assert_eq!(legal_directions(&board), vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn test_full_board_with_vertical_pair() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 8], [4, 2, 4, 8]]);
        assert!(has_moves(&board));
        assert_eq!(legal_directions(&board), vec![Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_empty_board_has_moves_but_no_legal_direction() {
        let board = create_board_empty();
        assert!(has_moves(&board));
        assert!(legal_directions(&board).is_empty());
    }
}
