use crate::game::board::Board;

/// Returns the (row, col) of every empty cell, in row-major order.
pub fn empty_positions(board: &Board) -> Vec<(usize, usize)> {
    board
        .cells
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, &value)| if value == 0 { Some((r, c)) } else { None })
        })
        .collect()
}
