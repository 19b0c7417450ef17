//! Caller-managed index cache.
//!
//! Owns the game collection and a lazily rebuilt [`ScheduleIndex`].
//! Every mutation marks the index stale; the next read rebuilds it from
//! scratch, so a cached read always equals a fresh `ScheduleIndex::build`
//! over the current games. There is no locking: callers serialize
//! mutations themselves.

use crate::config::ScheduleConfig;
use crate::models::Game;

use super::ScheduleIndex;

/// Game collection plus a cached index over it.
#[derive(Debug, Clone)]
pub struct ScheduleCache {
    config: ScheduleConfig,
    games: Vec<Game>,
    index: Option<ScheduleIndex>,
}

impl ScheduleCache {
    /// Creates an empty cache.
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            games: Vec::new(),
            index: None,
        }
    }

    /// Seeds the cache with a game collection.
    pub fn with_games(mut self, games: Vec<Game>) -> Self {
        self.replace_all(games);
        self
    }

    /// Current games, in insertion order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Catalogs the index is built against.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Whether the next [`index`](Self::index) call will rebuild.
    pub fn is_stale(&self) -> bool {
        self.index.is_none()
    }

    /// Drops the cached index.
    pub fn invalidate(&mut self) {
        if self.index.take().is_some() {
            tracing::debug!(games = self.games.len(), "schedule index invalidated");
        }
    }

    /// Appends a game.
    pub fn insert(&mut self, game: Game) {
        self.games.push(game);
        self.invalidate();
    }

    /// Replaces the game with the same id in place, or appends it.
    ///
    /// Returns the replaced game.
    pub fn upsert(&mut self, game: Game) -> Option<Game> {
        let previous = match self.games.iter().position(|g| g.id == game.id) {
            Some(pos) => Some(std::mem::replace(&mut self.games[pos], game)),
            None => {
                self.games.push(game);
                None
            }
        };
        self.invalidate();
        previous
    }

    /// Removes the first game with the given id.
    pub fn remove(&mut self, id: &str) -> Option<Game> {
        let pos = self.games.iter().position(|g| g.id == id)?;
        let removed = self.games.remove(pos);
        self.invalidate();
        Some(removed)
    }

    /// Replaces the whole collection.
    pub fn replace_all(&mut self, games: Vec<Game>) {
        self.games = games;
        self.invalidate();
    }

    /// Current index, rebuilding it if stale.
    pub fn index(&mut self) -> &ScheduleIndex {
        let games = &self.games;
        let config = &self.config;
        self.index.get_or_insert_with(|| {
            tracing::debug!(games = games.len(), "rebuilding schedule index");
            ScheduleIndex::build(games, config)
        })
    }
}
