//! # 2048 Game Library
//!
//! The 2048 sliding-tile puzzle, played in the browser through a small HTTP
//! server.
//!
//! ## Features
//!
//! - **Board Engine**: pure line merge, directional moves, random spawning and
//!   terminal-state detection on a 4x4 grid
//! - **Game Controller**: move handling with score, win and loss tracking
//! - **Sessions**: in-memory store of running games
//! - **Web UI**: server-rendered HTML page plus a JSON API
//!
//! ## Usage
//!
//! ```rust
//! use twenty48::game::{apply_move, Board, Direction};
//!
//! let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
//! let outcome = apply_move(&board, Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(outcome.board.cells[0], [4, 0, 0, 0]);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Board engine: pure transitions over the 4x4 grid
pub mod game;

/// Game controller and session store
pub mod services;

/// HTTP server and HTML rendering
pub mod servers;

/// File logging setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use services::{SpawnPolicy, MoveReport};

pub use servers::{WebUiConfig, WebUiServer};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the 2048 library
#[derive(Debug, thiserror::Error)]
pub enum Twenty48Error {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Twenty48Error>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
