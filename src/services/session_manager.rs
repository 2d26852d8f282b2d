// src/services/session_manager.rs - In-memory store of running games

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::game::{Direction, GameState, RngSource};
use crate::services::game_manager::{handle_move, new_game, MoveReport, SpawnPolicy};
use crate::{Result, Twenty48Error};

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 6;

// ============================================================================
// DATA TYPES
// ============================================================================

#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: String,
    /// Short code used in page URLs.
    pub code: String,
    /// Unix timestamp (seconds).
    pub created_at: i64,
    pub state: GameState,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub spawn_policy: SpawnPolicy,
    /// Fixed seed for reproducible games; OS entropy otherwise.
    pub seed: Option<u64>,
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            spawn_policy: SpawnPolicy::default(),
            seed: None,
            max_sessions: 10_000,
        }
    }
}

#[derive(Debug)]
pub struct SessionStoreState {
    pub sessions: HashMap<String, GameSession>,
    pub sessions_by_code: HashMap<String, String>,
    /// Session ids, oldest first.
    creation_order: VecDeque<String>,
    rng: StdRng,
}

impl SessionStoreState {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            sessions: HashMap::new(),
            sessions_by_code: HashMap::new(),
            creation_order: VecDeque::new(),
            rng,
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    store: Arc<RwLock<SessionStoreState>>,
    spawn_policy: SpawnPolicy,
    max_sessions: usize,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

pub fn new_session_manager(config: SessionConfig) -> SessionManager {
    SessionManager {
        store: Arc::new(RwLock::new(SessionStoreState::new(config.seed))),
        spawn_policy: config.spawn_policy,
        max_sessions: config.max_sessions.max(1),
    }
}

impl SessionManager {
    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.spawn_policy
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}

// ============================================================================
// PURE STATE OPERATIONS
// ============================================================================

/// Look a session up by its short code (case-insensitive) or its id.
pub fn find_session<'a>(state: &'a SessionStoreState, key: &str) -> Option<&'a GameSession> {
    let key = key.trim();
    state
        .sessions_by_code
        .get(&key.to_ascii_uppercase())
        .and_then(|session_id| state.sessions.get(session_id))
        .or_else(|| state.sessions.get(key))
}

/// Register a session, evicting the oldest ones while the store is at capacity.
/// Returns the evicted sessions.
pub fn insert_session(
    state: &mut SessionStoreState,
    session: GameSession,
    max_sessions: usize,
) -> Vec<GameSession> {
    let mut evicted = Vec::new();
    while state.sessions.len() >= max_sessions {
        let Some(oldest_id) = state.creation_order.pop_front() else {
            break;
        };
        if let Some(old) = state.sessions.remove(&oldest_id) {
            state.sessions_by_code.remove(&old.code);
            evicted.push(old);
        }
    }

    state.creation_order.push_back(session.id.clone());
    state.sessions_by_code.insert(session.code.clone(), session.id.clone());
    state.sessions.insert(session.id.clone(), session);
    evicted
}

fn generate_session_code(state: &mut SessionStoreState) -> String {
    loop {
        let code: String = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[state.rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        if !state.sessions_by_code.contains_key(&code) {
            return code;
        }
    }
}

fn create_game_session(state: &mut SessionStoreState) -> GameSession {
    let code = generate_session_code(state);
    let mut source = RngSource(&mut state.rng);
    GameSession {
        id: Uuid::new_v4().to_string(),
        code,
        created_at: chrono::Utc::now().timestamp(),
        state: new_game(&mut source),
    }
}

// ============================================================================
// STORE OPERATIONS
// ============================================================================

pub async fn create_session_with_manager(manager: &SessionManager) -> GameSession {
    let mut state = manager.store.write().await;
    let session = create_game_session(&mut state);

    for old in insert_session(&mut state, session.clone(), manager.max_sessions()) {
        log::warn!("🗑️ Session {} evicted (store full)", old.code);
    }

    log::info!("🎮 New game {} ({})\n{}", session.code, session.id, session.state.board);
    session
}

pub async fn get_session_with_manager(manager: &SessionManager, key: &str) -> Result<GameSession> {
    let state = manager.store.read().await;
    find_session(&state, key)
        .cloned()
        .ok_or_else(|| Twenty48Error::SessionNotFound(key.to_string()))
}

/// Run one complete move transition for a session under the write lock.
pub async fn play_move_with_manager(
    manager: &SessionManager,
    key: &str,
    direction: Direction,
) -> Result<(GameSession, MoveReport)> {
    let mut guard = manager.store.write().await;
    let store = &mut *guard;

    let session_id = find_session(store, key)
        .map(|session| session.id.clone())
        .ok_or_else(|| Twenty48Error::SessionNotFound(key.to_string()))?;

    let Some(session) = store.sessions.get_mut(&session_id) else {
        return Err(Twenty48Error::SessionNotFound(key.to_string()));
    };

    let mut source = RngSource(&mut store.rng);
    let (next, report) = handle_move(session.state.clone(), direction, manager.spawn_policy, &mut source);
    session.state = next;

    if report.changed && report.status.is_over() {
        log::info!(
            "🏁 Game {} finished: {:?} with score {}",
            session.code,
            report.status,
            session.state.score
        );
    }

    Ok((session.clone(), report))
}

pub async fn session_count_with_manager(manager: &SessionManager) -> usize {
    manager.store.read().await.sessions.len()
}
