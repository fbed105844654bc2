//! Tic-Tac-Toe
//! Rules engine for a single game: turn enforcement, move validation and win/draw detection

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod board;
pub mod movement;
pub mod opponent;
pub mod player;

pub use board::Board;
pub use movement::Move;
pub use opponent::{MoveSelector, RandomSelector, random_move};
pub use player::Player;

/// Attempted action on a game that has already concluded
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct GameOver(&'static str);

impl GameOver {
    pub const fn new(reason: &'static str) -> Self {
        Self(reason)
    }
}

/// Rule violations raised while playing a game
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Player {player} not in game between {first} and {second}")]
    NotInGame {
        player: Player,
        first: Player,
        second: Player,
    },
    #[error("It is not {0}'s turn")]
    OutOfTurn(Player),
    #[error("{x},{y} has already been played by player {occupant}.")]
    Occupied {
        x: usize,
        y: usize,
        occupant: Player,
    },
    #[error("Position ({x}, {y}) outside of the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("Cannot play game with {0} positions, 9 required.")]
    BoardLength(usize),
    #[error("Unknown marker {0}, only X and O can play")]
    UnknownMarker(Player),
    #[error("Game has {moves} moves but {filled} filled positions")]
    MoveCount { moves: usize, filled: usize },
    #[error("Move {x},{y} by player {player} does not match the board")]
    MoveMismatch { x: usize, y: usize, player: Player },
    #[error(transparent)]
    GameOver(#[from] GameOver),
}

impl GameError {
    /// Whether the error comes from acting on a finished game
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameError::GameOver(_))
    }
}

/// State of a single game
///
/// Only the moves and the board are stored: winner, turn and remaining cells
/// are derived from the board on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    id: Uuid,
    created_at: DateTime<Utc>,
    moves: Vec<Move>,
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            // Chronological history
            moves: Vec::new(),
            // Empty board
            board: Board::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player holding a winning line
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Game has a winner or no empty cell remains
    pub fn finished(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// Player to move: whoever has fewer markers on the board, crosses on a tie
    pub fn next_player(&self) -> Result<Player, GameOver> {
        if self.finished() {
            return Err(GameOver::new("No player is next, the game is over"));
        }

        let crosses = self.board.count(Player::X);
        let noughts = self.board.count(Player::O);

        Ok(if crosses <= noughts { Player::X } else { Player::O })
    }

    pub fn empty_positions(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Places the move's marker on the board
    ///
    /// All checks run before the game is touched, a rejected move leaves it unchanged.
    pub fn play(&mut self, movement: Move) -> Result<(), GameError> {
        if self.finished() {
            return Err(GameOver::new("Unable to play move, game is finished").into());
        }

        let player = movement.player();

        // Once two players are on the board nobody else may join
        if let [first, second] = self.board.players()[..] {
            if player != first && player != second {
                return Err(GameError::NotInGame {
                    player,
                    first,
                    second,
                });
            }
        }

        if player != self.next_player()? {
            return Err(GameError::OutOfTurn(player));
        }

        let position = movement.position();
        if let Some(occupant) = self.board.get(position) {
            return Err(GameError::Occupied {
                x: movement.x(),
                y: movement.y(),
                occupant,
            });
        }

        self.board.place(position, player);
        self.moves.push(movement);
        Ok(())
    }
}

/// Unvalidated game as found in serialized data
#[derive(Deserialize)]
struct GameRecord {
    id: Uuid,
    created_at: DateTime<Utc>,
    moves: Vec<Move>,
    board: Board,
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let GameRecord {
            id,
            created_at,
            moves,
            board,
        } = record;

        if let Some(&marker) = board
            .players()
            .iter()
            .find(|&&p| p != Player::X && p != Player::O)
        {
            return Err(GameError::UnknownMarker(marker));
        }

        let filled = board.cells().iter().flatten().count();
        if moves.len() != filled {
            return Err(GameError::MoveCount {
                moves: moves.len(),
                filled,
            });
        }

        // Every move must hold its own cell, equal counts then cover the whole board
        let mut seen = [false; board::BOARD_SIZE];
        if let Some(movement) = moves.iter().find(|movement| {
            let position = movement.position();
            let duplicate = std::mem::replace(&mut seen[position], true);
            duplicate || board.get(position) != Some(movement.player())
        }) {
            return Err(GameError::MoveMismatch {
                x: movement.x(),
                y: movement.y(),
                player: movement.player(),
            });
        }

        Ok(Self {
            id,
            created_at,
            moves,
            board,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        match (self.winner(), self.next_player()) {
            (Some(player), _) => write!(f, "Game finished! {player} wins!"),
            (None, Ok(player)) => write!(f, "Current player: {player}"),
            (None, Err(_)) => write!(f, "Game finished! It's a draw!"),
        }
    }
}
