use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// Player marker placed on the board
///
/// Games are played between [`Player::X`] and [`Player::O`], but any marker is
/// representable so that a third participant can be turned away by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(char);

impl Player {
    /// Crosses, always opens the game
    pub const X: Player = Player('X');
    /// Noughts
    pub const O: Player = Player('O');

    pub const fn new(marker: char) -> Self {
        Self(marker)
    }

    pub const fn marker(&self) -> char {
        self.0
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
