use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tokio::sync::Mutex;

use super::{
    AppState, Opponent,
    error::ApiError,
    messages::{GameView, MoveRequest},
};
use crate::tictactoe::{Game, GameError, Move};

/// List all games in the order they were created
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<GameView>> {
    let games = state.games.lock().await;
    Json(games.iter().map(GameView::from).collect())
}

/// Create a new game, returning its id
pub async fn create_game(State(state): State<AppState>) -> Json<String> {
    let id = state.games.lock().await.create();
    log::info!("Game {id} created");
    Json(id.to_string())
}

/// Game state by id
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let games = state.games.lock().await;
    let game = games.get(&game_id).ok_or(ApiError::NotFound)?;
    Ok(Json(GameView::from(game)))
}

/// Moves of a game in chronological order
pub async fn list_moves(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<Move>>, ApiError> {
    let games = state.games.lock().await;
    let game = games.get(&game_id).ok_or(ApiError::NotFound)?;
    Ok(Json(game.moves().to_vec()))
}

/// Play the human move, then answer with the opponent unless the game is over
pub async fn play_move(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameView>, ApiError> {
    let Json(request) = payload?;
    let mut games = state.games.lock().await;
    let game = games.get_mut(&game_id).ok_or(ApiError::NotFound)?;

    if game.finished() {
        return Err(ApiError::GameFinished);
    }

    let player = game.next_player().map_err(GameError::from)?;
    let movement = Move::new(request.x, request.y, player)?;
    if let Err(e) = game.play(movement) {
        log::warn!("Game {game_id}: rejected move by {player}: {e}");
        return Err(e.into());
    }
    log::debug!(
        "Game {game_id}: player {player} played ({x}, {y})",
        x = request.x,
        y = request.y
    );

    if !game.finished() {
        match reply(game, &state.opponent).await {
            Ok(()) => {}
            // The human move ended the game
            Err(e) if e.is_game_over() => log::debug!("Game {game_id}: no reply, {e}"),
            Err(e) => {
                log::error!("Game {game_id}: opponent move rejected: {e}");
                return Err(ApiError::Opponent(e));
            }
        }
    }

    if let Some(winner) = game.winner() {
        log::info!("Game {game_id} won by {winner}");
    } else if game.finished() {
        log::info!("Game {game_id} ended in a draw");
    }
    log::trace!("Game {game_id}:\n{game}");

    Ok(Json(GameView::from(&*game)))
}

/// Automated move for whoever plays next
async fn reply(game: &mut Game, opponent: &Mutex<Opponent>) -> Result<(), GameError> {
    let player = game.next_player()?;
    let movement = opponent.lock().await.select(game, player)?;
    log::debug!(
        "Game {id}: opponent {player} plays ({x}, {y})",
        id = game.id(),
        x = movement.x(),
        y = movement.y()
    );
    game.play(movement)
}
