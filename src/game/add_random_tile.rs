use crate::game::board::Board;
use crate::game::empty_positions::empty_positions;
use rand::Rng;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// Source of uniform draws in `[0, 1)`.
///
/// Every random decision in the game goes through this trait, so tests can
/// script the draws with a closure.
pub trait UniformSource {
    fn uniform(&mut self) -> f64;
}

impl<F> UniformSource for F
where
    F: FnMut() -> f64,
{
    fn uniform(&mut self) -> f64 {
        self()
    }
}

/// Adapts any `rand` generator into a `UniformSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Place a 2 (90%) or a 4 (10%) on a uniformly chosen empty cell.
///
/// A full board is returned unchanged and no draw is consumed. Otherwise the
/// first draw picks the cell and the second picks the value.
pub fn add_random_tile<S: UniformSource + ?Sized>(board: &Board, source: &mut S) -> Board {
    let empties = empty_positions(board);
    if empties.is_empty() {
        return *board;
    }

    let index = ((source.uniform() * empties.len() as f64) as usize).min(empties.len() - 1);
    let (r, c) = empties[index];
    let value = if source.uniform() < TWO_PROBABILITY { 2 } else { 4 };

    let mut next = *board;
    next.cells[r][c] = value;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{board_sum, create_board_empty};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scripted(draws: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = draws.into_iter();
        move || iter.next().expect("ran out of scripted draws")
    }

    #[test]
    fn test_full_board_is_returned_unchanged() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut source = scripted(vec![]);
        assert_eq!(add_random_tile(&board, &mut source), board);
    }

    #[test]
    fn test_first_draw_picks_cell_second_picks_value() {
        let board = create_board_empty();
        let mut source = scripted(vec![0.0, 0.5]);
        let next = add_random_tile(&board, &mut source);
        assert_eq!(next.cells[0][0], 2);

        let mut source = scripted(vec![0.999, 0.95]);
        let next = add_random_tile(&board, &mut source);
        assert_eq!(next.cells[3][3], 4);
    }

    #[test]
    fn test_only_empty_cells_are_candidates() {
        let board = Board::from_rows([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        let mut source = scripted(vec![0.7, 0.1]);
        let next = add_random_tile(&board, &mut source);
        assert_eq!(next.cells[3][3], 2);
        assert_eq!(next.cells[1][1], 0);
    }

    #[test]
    fn test_out_of_range_draw_is_clamped() {
        let mut source = || 1.0;
        let next = add_random_tile(&create_board_empty(), &mut source);
        assert_eq!(next.cells[3][3], 4);
    }

    #[test]
    fn test_rng_source_spawns_two_or_four() {
        let mut source = RngSource(StdRng::seed_from_u64(7));
        let mut board = create_board_empty();
        for spawned in 1..=16 {
            board = add_random_tile(&board, &mut source);
            assert_eq!(board.tiles().filter(|&v| v != 0).count(), spawned);
        }
        assert!(board.tiles().all(|v| v == 2 || v == 4));
        assert!(board_sum(&board) >= 32);
    }
}
