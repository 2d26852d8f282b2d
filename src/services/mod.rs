pub mod game_manager;
pub mod session_manager;

pub use game_manager::{handle_move, new_game, MoveReport, SpawnPolicy};
pub use session_manager::{new_session_manager, GameSession, SessionConfig, SessionManager};
