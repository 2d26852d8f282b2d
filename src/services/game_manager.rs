// src/services/game_manager.rs - Game controller: init and directional moves

use serde::{Deserialize, Serialize};

use crate::game::{
    add_random_tile, apply_move, board_sum, contains_tile, create_board_empty, has_moves, Direction,
    GameState, GameStatus, UniformSource, WINNING_TILE,
};

// ============================================================================
// TYPES
// ============================================================================

/// Whether a tile is spawned after each accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpawnPolicy {
    /// Tiles are only placed when the game starts.
    #[default]
    InitialOnly,
    /// Standard rule: one tile after every move that changed the board.
    EveryMove,
}

/// What a single directional input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub changed: bool,
    pub spawned: bool,
    pub status: GameStatus,
}

// ============================================================================
// PURE TRANSITIONS
// ============================================================================

/// Empty board plus two random tiles. Score stays 0 until the first move.
pub fn new_game<S: UniformSource + ?Sized>(source: &mut S) -> GameState {
    let board = create_board_empty();
    let board = add_random_tile(&board, source);
    let board = add_random_tile(&board, source);

    GameState {
        board,
        score: 0,
        won: false,
        game_over: false,
        moves: 0,
    }
}

/// Apply one directional input.
///
/// Input on a finished game and moves that change nothing leave the state
/// untouched. Otherwise score, win and loss are evaluated on the moved board;
/// with `SpawnPolicy::EveryMove` a tile is then added and the loss check is
/// repeated on the board the player will face.
pub fn handle_move<S: UniformSource + ?Sized>(
    state: GameState,
    direction: Direction,
    policy: SpawnPolicy,
    source: &mut S,
) -> (GameState, MoveReport) {
    if state.game_over {
        let report = unchanged_report(&state);
        return (state, report);
    }

    let outcome = apply_move(&state.board, direction);
    if !outcome.changed {
        let report = unchanged_report(&state);
        return (state, report);
    }

    let mut next = state;
    next.board = outcome.board;
    next.score = board_sum(&next.board);
    next.won |= contains_tile(&next.board, WINNING_TILE);
    next.game_over = !has_moves(&next.board);
    next.moves += 1;

    let spawned = match policy {
        SpawnPolicy::InitialOnly => false,
        SpawnPolicy::EveryMove => {
            let with_tile = add_random_tile(&next.board, source);
            let spawned = with_tile != next.board;
            next.board = with_tile;
            next.game_over = !has_moves(&next.board);
            spawned
        }
    };

    log::debug!(
        "➡️ Move {} accepted (score {}, spawned: {})\n{}",
        direction,
        next.score,
        spawned,
        next.board
    );

    let report = MoveReport {
        changed: true,
        spawned,
        status: next.status(),
    };
    (next, report)
}

fn unchanged_report(state: &GameState) -> MoveReport {
    MoveReport {
        changed: false,
        spawned: false,
        status: state.status(),
    }
}
