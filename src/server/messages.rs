use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tictactoe::{Game, Move, Player, board::BOARD_SIDE};

/// Move submitted by the human player
/// Client -> Server
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveRequest {
    pub x: usize,
    pub y: usize,
}

/// Full game state
/// Server -> Client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub moves: Vec<Move>,
    pub winner: Option<Player>,
    pub finished: bool,
    /// `None` once the game is finished
    pub next_player: Option<Player>,
    /// Rows of markers, empty cells as `""`
    pub board: [[String; BOARD_SIDE]; BOARD_SIDE],
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id(),
            created_at: game.created_at(),
            moves: game.moves().to_vec(),
            winner: game.winner(),
            finished: game.finished(),
            next_player: game.next_player().ok(),
            board: game
                .board()
                .rows()
                .map(|row| row.map(|cell| cell.map_or_else(String::new, |p| p.to_string()))),
        }
    }
}

/// Error payload
/// Server -> Client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
