use rand::{Rng, SeedableRng, seq::IndexedRandom};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::{Game, GameOver, Move, Player};

/// Uniformly random move for `player` among the empty cells
///
/// The game is left untouched and the turn is not checked: the caller picks
/// the player and plays the returned move.
pub fn random_move<R: Rng + ?Sized>(
    game: &Game,
    player: Player,
    rng: &mut R,
) -> Result<Move, GameOver> {
    // A game that is not finished has at least one empty cell
    let finished = GameOver::new("Cannot play a finished game");
    if game.finished() {
        return Err(finished);
    }
    let position = *game.empty_positions().choose(rng).ok_or(finished)?;
    Ok(Move::at(position, player))
}

/// Source of the automated opponent's moves
pub trait MoveSelector: Send {
    fn select(&mut self, game: &Game, player: Player) -> Result<Move, GameOver>;
}

/// Opponent playing uniformly random legal moves
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: Xoshiro256PlusPlus,
}

impl RandomSelector {
    /// Seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_os_rng(),
        }
    }

    /// Reproducible sequence of moves
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, game: &Game, player: Player) -> Result<Move, GameOver> {
        random_move(game, player, &mut self.rng)
    }
}
