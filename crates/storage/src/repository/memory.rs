use chrono::{NaiveDateTime, Utc};

use crate::models::{Game, Player, Score};

/// Every table of the application, held in memory.
///
/// Rows keep insertion order, which for scores is also creation order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub(crate) players: Vec<Player>,
    pub(crate) games: Vec<Game>,
    pub(crate) scores: Vec<Score>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
