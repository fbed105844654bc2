use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{GameError, player::Player};

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// Side length of the square board
pub const BOARD_SIDE: usize = 3;

/// Cell index triples that win the game when held by a single player
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-Tac-Toe board
/// Cell `y * 3 + x` holds the marker placed at column `x`, row `y`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Option<Player>>", into = "Vec<Option<Player>>")]
pub struct Board([Option<Player>; BOARD_SIZE]);

pub fn all_equal<T: Copy + PartialEq>(arr: &[T]) -> Option<T> {
    let mut it = arr.iter();
    let eq = it.next()?;
    if it.all(|x| x == eq) { Some(*eq) } else { None }
}

impl Board {
    /// New empty board
    pub fn new() -> Self {
        Self([None; BOARD_SIZE])
    }

    pub fn cells(&self) -> &[Option<Player>; BOARD_SIZE] {
        &self.0
    }

    /// Marker at `position`, `None` if empty or outside of the board
    pub fn get(&self, position: usize) -> Option<Player> {
        self.0.get(position).copied().flatten()
    }

    pub(crate) fn place(&mut self, position: usize, player: Player) {
        self.0[position] = Some(player);
    }

    /// Board reshaped into 3 rows of 3 cells
    pub fn rows(&self) -> [[Option<Player>; BOARD_SIDE]; BOARD_SIDE] {
        std::array::from_fn(|y| std::array::from_fn(|x| self.0[y * BOARD_SIDE + x]))
    }

    /// Indices of the empty cells
    pub fn empty_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(position, cell)| cell.is_none().then_some(position))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Number of cells held by `player`
    pub fn count(&self, player: Player) -> usize {
        self.0.iter().filter(|&&cell| cell == Some(player)).count()
    }

    /// Distinct markers on the board, sorted
    pub fn players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.0.iter().flatten().copied().collect();
        players.sort_unstable();
        players.dedup();
        players
    }

    /// Player holding a complete winning line, if any
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            match all_equal(&line.map(|position| self.0[position])) {
                Some(Some(player)) => Some(player),
                _ => None,
            }
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Option<Player>>> for Board {
    type Error = GameError;

    fn try_from(cells: Vec<Option<Player>>) -> Result<Self, Self::Error> {
        let length = cells.len();
        cells
            .try_into()
            .map(Self)
            .map_err(|_| GameError::BoardLength(length))
    }
}

impl From<Board> for Vec<Option<Player>> {
    fn from(board: Board) -> Self {
        board.0.to_vec()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Some(player) => write!(f, "{player} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
