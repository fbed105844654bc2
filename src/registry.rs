//! In-memory game registry
//! Owns every game for the lifetime of the process, without eviction or persistence

use std::collections::HashMap;

use uuid::Uuid;

use crate::tictactoe::Game;

#[derive(Debug, Default)]
pub struct GameRegistry {
    // Creation order
    games: Vec<Game>,
    // Game id -> index in `games`
    index: HashMap<Uuid, usize>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and stores a new empty game, returning its id
    pub fn create(&mut self) -> Uuid {
        self.insert(Game::new())
    }

    /// Stores a game, replacing any previous game with the same id in place
    pub fn insert(&mut self, game: Game) -> Uuid {
        let id = game.id();
        match self.index.get(&id) {
            Some(&i) => self.games[i] = game,
            None => {
                self.index.insert(id, self.games.len());
                self.games.push(game);
            }
        }
        id
    }

    /// Looks up a game by its id as returned by [`GameRegistry::create`]
    /// Any other spelling of the id, or an id that does not parse, is unknown
    pub fn get(&self, id: &str) -> Option<&Game> {
        let i = self.lookup(id)?;
        self.games.get(i)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Game> {
        let i = self.lookup(id)?;
        self.games.get_mut(i)
    }

    fn lookup(&self, id: &str) -> Option<usize> {
        // Only the lowercase hyphenated form names a game
        let uuid = Uuid::parse_str(id)
            .ok()
            .filter(|uuid| uuid.hyphenated().to_string() == id)?;
        self.index.get(&uuid).copied()
    }

    /// Games in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
