use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square grid.
pub const SIZE: usize = 4;

/// Tile value that marks a game as won.
pub const WINNING_TILE: u32 = 2048;

/// 4x4 grid of tile values, `0` meaning an empty cell.
///
/// Serialised as a plain array of rows so JSON clients see `[[2,0,0,0],...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub cells: [[u32; SIZE]; SIZE],
}

pub fn create_board_empty() -> Board {
    Board::default()
}

impl Board {
    pub fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Board {
        let mut cells = [[0; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[c][r] = value;
            }
        }
        Board { cells }
    }

    /// Horizontal mirror: every row reversed.
    pub fn mirror(&self) -> Board {
        let mut cells = self.cells;
        cells.iter_mut().for_each(|row| row.reverse());
        Board { cells }
    }

    pub fn tiles(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().copied()
    }
}

/// Sum of every tile on the board. This is the displayed score.
pub fn board_sum(board: &Board) -> u32 {
    board.tiles().sum()
}

pub fn max_tile(board: &Board) -> u32 {
    board.tiles().max().unwrap_or(0)
}

pub fn contains_tile(board: &Board, value: u32) -> bool {
    board.tiles().any(|tile| tile == value)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
        }
        Ok(())
    }
}
