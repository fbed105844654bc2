//! # HTTP API
//!
//! Routes, relative to wherever the router is mounted:
//! - `GET  /games`                 list games in creation order
//! - `POST /games`                 create a game, returns its id
//! - `GET  /games/{game_id}`       game state
//! - `GET  /games/{game_id}/moves` moves in chronological order
//! - `POST /games/{game_id}/moves` play `{x, y}` and receive the opponent's answer

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::sync::Mutex;

use crate::{registry::GameRegistry, tictactoe::MoveSelector};

pub mod error;
pub mod handlers;
pub mod messages;

/// Automated opponent shared by all games
pub type Opponent = Box<dyn MoveSelector>;

/// Shared state for the application
/// Every request locks the whole registry, so a game is never acted on concurrently
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<Mutex<GameRegistry>>,
    pub opponent: Arc<Mutex<Opponent>>,
}

impl AppState {
    pub fn new(opponent: impl MoveSelector + 'static) -> Self {
        Self {
            games: Arc::new(Mutex::new(GameRegistry::new())),
            opponent: Arc::new(Mutex::new(Box::new(opponent))),
        }
    }
}

/// API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/games",
            get(handlers::list_games).post(handlers::create_game),
        )
        .route("/games/{game_id}", get(handlers::get_game))
        .route(
            "/games/{game_id}/moves",
            get(handlers::list_moves).post(handlers::play_move),
        )
        .with_state(state)
}
