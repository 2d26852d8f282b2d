pub mod add_random_tile;
pub mod apply_move;
pub mod board;
pub mod direction;
pub mod empty_positions;
pub mod game_state;
pub mod has_moves;
pub mod merge_line;

pub use add_random_tile::{add_random_tile, RngSource, UniformSource};
pub use apply_move::{apply_move, MoveOutcome};
pub use board::{board_sum, contains_tile, create_board_empty, max_tile, Board, SIZE, WINNING_TILE};
pub use direction::Direction;
pub use empty_positions::empty_positions;
pub use game_state::{GameState, GameStatus};
pub use has_moves::{has_moves, legal_directions};
pub use merge_line::merge_line;
