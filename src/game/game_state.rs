use crate::game::board::Board;
use serde::{Deserialize, Serialize};

/// Everything the controller tracks for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Sum of the tiles on the board after the last accepted move.
    pub score: u32,
    /// Set once a 2048 tile appears; never cleared.
    pub won: bool,
    pub game_over: bool,
    /// Number of accepted (board-changing) moves.
    pub moves: u32,
}

/// Display status. `Won` and `Lost` are both the terminal state; a game that
/// reached 2048 but still has moves is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.won) {
            (false, _) => GameStatus::Playing,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }
}
