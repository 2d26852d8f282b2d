// src/servers/response_builders.rs - JSON bodies for the game API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::game::{legal_directions, Board, Direction, GameStatus};
use crate::servers::render::share_text;
use crate::services::{GameSession, MoveReport};
use crate::Twenty48Error;

// ============================================================================
// API TYPES
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiError {
    pub status: String,
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameView {
    pub id: String,
    pub code: String,
    pub board: Board,
    pub score: u32,
    pub won: bool,
    pub game_over: bool,
    pub status: GameStatus,
    pub moves: u32,
    pub legal_directions: Vec<Direction>,
    pub share_text: String,
}

/// Direction is kept as a string so a bad value maps to `INVALID_DIRECTION`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MoveRequest {
    pub direction: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MoveResponse {
    pub changed: bool,
    pub spawned: bool,
    pub game: GameView,
}

// ============================================================================
// BUILDERS
// ============================================================================

pub fn game_view(session: &GameSession, app_url: &str) -> GameView {
    let state = &session.state;
    let legal = if state.game_over {
        Vec::new()
    } else {
        legal_directions(&state.board)
    };

    GameView {
        id: session.id.clone(),
        code: session.code.clone(),
        board: state.board,
        score: state.score,
        won: state.won,
        game_over: state.game_over,
        status: state.status(),
        moves: state.moves,
        legal_directions: legal,
        share_text: share_text(state.score, app_url),
    }
}

pub fn move_response(session: &GameSession, report: MoveReport, app_url: &str) -> MoveResponse {
    MoveResponse {
        changed: report.changed,
        spawned: report.spawned,
        game: game_view(session, app_url),
    }
}

pub fn error_code(error: &Twenty48Error) -> (StatusCode, &'static str) {
    match error {
        Twenty48Error::SessionNotFound(_) => (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND"),
        Twenty48Error::InvalidDirection(_) => (StatusCode::BAD_REQUEST, "INVALID_DIRECTION"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for Twenty48Error {
    fn into_response(self) -> Response {
        let (status, code) = error_code(&self);
        if status.is_server_error() {
            log::error!("❌ {}", self);
        } else {
            log::warn!("⚠️ Rejected request: {}", self);
        }

        let body = ApiError {
            status: "error".to_string(),
            code: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
