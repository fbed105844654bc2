use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    GameError,
    board::{BOARD_SIDE, BOARD_SIZE},
    player::Player,
};

/// A marker placed at column `x`, row `y`
///
/// Coordinates are validated on construction and the move cannot be altered afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveRecord")]
pub struct Move {
    x: usize,
    y: usize,
    player: Player,
    timestamp: DateTime<Utc>,
}

impl Move {
    /// Creates a move stamped with the current time
    pub fn new(x: usize, y: usize, player: Player) -> Result<Self, GameError> {
        Self::with_timestamp(x, y, player, Utc::now())
    }

    pub fn with_timestamp(
        x: usize,
        y: usize,
        player: Player,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, GameError> {
        if x >= BOARD_SIDE || y >= BOARD_SIDE {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(Self {
            x,
            y,
            player,
            timestamp,
        })
    }

    /// Creates a move from a board cell index
    pub fn from_position(position: usize, player: Player) -> Result<Self, GameError> {
        if position >= BOARD_SIZE {
            return Err(GameError::OutOfBounds {
                x: position % BOARD_SIDE,
                y: position / BOARD_SIDE,
            });
        }
        Ok(Self::at(position, player))
    }

    /// Caller guarantees `position` lies on the board
    pub(crate) fn at(position: usize, player: Player) -> Self {
        Self {
            x: position % BOARD_SIDE,
            y: position / BOARD_SIDE,
            player,
            timestamp: Utc::now(),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Board cell index
    pub fn position(&self) -> usize {
        self.y * BOARD_SIDE + self.x
    }
}

/// Unvalidated move as found in serialized data
#[derive(Deserialize)]
struct MoveRecord {
    x: usize,
    y: usize,
    player: Player,
    timestamp: DateTime<Utc>,
}

impl TryFrom<MoveRecord> for Move {
    type Error = GameError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        Self::with_timestamp(record.x, record.y, record.player, record.timestamp)
    }
}
