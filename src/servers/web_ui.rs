use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json as ResponseJson, Redirect, Response},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::game::Direction;
use crate::servers::render::{render_game_page, render_not_found_page};
use crate::servers::response_builders::{game_view, move_response, ApiResponse, GameView, MoveRequest, MoveResponse};
use crate::services::session_manager::{
    create_session_with_manager, get_session_with_manager, new_session_manager, play_move_with_manager,
};
use crate::services::{SessionConfig, SessionManager, SpawnPolicy};
use crate::{Result, Twenty48Error};

// Web UI server configuration
#[derive(Debug, Clone)]
pub struct WebUiConfig {
    pub port: u16,
    pub host: String,
    /// Public address of the app, quoted in the share text.
    pub app_url: String,
    pub spawn_policy: SpawnPolicy,
    pub seed: Option<u64>,
    pub max_sessions: usize,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            port: 8048,
            host: "0.0.0.0".to_string(),
            app_url: "http://localhost:8048".to_string(),
            spawn_policy: SpawnPolicy::default(),
            seed: None,
            max_sessions: 10_000,
        }
    }
}

#[derive(Clone)]
struct AppState {
    sessions: SessionManager,
    app_url: Arc<str>,
}

pub struct WebUiServer {
    config: WebUiConfig,
    sessions: SessionManager,
}

impl WebUiServer {
    pub fn new(config: WebUiConfig) -> Self {
        let sessions = new_session_manager(SessionConfig {
            spawn_policy: config.spawn_policy,
            seed: config.seed,
            max_sessions: config.max_sessions,
        });
        Self { config, sessions }
    }

    pub fn config(&self) -> &WebUiConfig {
        &self.config
    }

    pub async fn start(&self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| Twenty48Error::Server(format!("invalid listen address: {}", e)))?;
        let listener = TcpListener::bind(addr).await?;

        log::info!(
            "🌐 2048 server listening on http://{} (spawn policy: {:?})",
            addr,
            self.config.spawn_policy
        );

        axum::serve(listener, self.router()).await?;
        Ok(())
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            sessions: self.sessions.clone(),
            app_url: Arc::from(self.config.app_url.as_str()),
        };

        Router::new()
            .route("/", get(new_game_page))
            .route("/games/{code}", get(game_page))
            .route("/games/{code}/{direction}", post(move_from_form))
            .route("/api/status", get(api_status))
            .route("/api/games", post(api_create_game))
            .route("/api/games/{code}", get(api_get_game))
            .route("/api/games/{code}/moves", post(api_make_move))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state)
    }
}

// ============================================================================
// HTML HANDLERS
// ============================================================================

async fn new_game_page(State(state): State<AppState>) -> Redirect {
    let session = create_session_with_manager(&state.sessions).await;
    Redirect::to(&format!("/games/{}", session.code))
}

async fn game_page(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match get_session_with_manager(&state.sessions, &code).await {
        Ok(session) => Html(render_game_page(&session, &state.app_url)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, Html(render_not_found_page(&code))).into_response(),
    }
}

async fn move_from_form(
    State(state): State<AppState>,
    Path((code, direction)): Path<(String, String)>,
) -> Response {
    let direction: Direction = match direction.parse() {
        Ok(direction) => direction,
        Err(e) => return e.into_response(),
    };

    match play_move_with_manager(&state.sessions, &code, direction).await {
        Ok((session, _)) => Redirect::to(&format!("/games/{}", session.code)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, Html(render_not_found_page(&code))).into_response(),
    }
}

// ============================================================================
// JSON HANDLERS
// ============================================================================

async fn api_status() -> ResponseJson<ApiResponse> {
    ResponseJson(ApiResponse {
        status: "ready".to_string(),
        message: "2048 server is running".to_string(),
    })
}

async fn api_create_game(State(state): State<AppState>) -> (StatusCode, ResponseJson<GameView>) {
    let session = create_session_with_manager(&state.sessions).await;
    (StatusCode::CREATED, ResponseJson(game_view(&session, &state.app_url)))
}

async fn api_get_game(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<ResponseJson<GameView>> {
    let session = get_session_with_manager(&state.sessions, &code).await?;
    Ok(ResponseJson(game_view(&session, &state.app_url)))
}

async fn api_make_move(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(request): Json<MoveRequest>,
) -> Result<ResponseJson<MoveResponse>> {
    let direction: Direction = request.direction.parse()?;
    let (session, report) = play_move_with_manager(&state.sessions, &code, direction).await?;
    Ok(ResponseJson(move_response(&session, report, &state.app_url)))
}
