use uuid::Uuid;

use super::memory::{MemoryStore, now};
use super::ScoreStore;
use crate::error::{Result, StorageError};
use crate::models::Score;

impl ScoreStore for MemoryStore {
    fn find_score(&self, game_id: Uuid, player_id: Uuid) -> Option<Score> {
        self.scores
            .iter()
            .find(|s| s.game_id == game_id && s.player_id == player_id)
            .cloned()
    }

    fn find_score_by_id(&self, score_id: Uuid) -> Result<Score> {
        self.scores
            .iter()
            .find(|s| s.score_id == score_id)
            .cloned()
            .ok_or(StorageError::NotFound("Score"))
    }

    fn find_scores_by_player(&self, player_id: Uuid, verified_only: bool) -> Vec<Score> {
        let mut scores: Vec<Score> = self
            .scores
            .iter()
            .filter(|s| s.player_id == player_id && (!verified_only || s.is_verified))
            .cloned()
            .collect();
        // stable, so rows created in the same instant keep insertion order
        scores.sort_by_key(|s| s.created_at);
        scores
    }

    fn find_scores_by_game(&self, game_id: Uuid) -> Vec<Score> {
        self.scores
            .iter()
            .filter(|s| s.game_id == game_id)
            .cloned()
            .collect()
    }

    fn upsert(&mut self, score: Score) -> Score {
        match self
            .scores
            .iter_mut()
            .find(|s| s.game_id == score.game_id && s.player_id == score.player_id)
        {
            Some(existing) => *existing = score.clone(),
            None => self.scores.push(score.clone()),
        }
        score
    }

    fn mark_verified(&mut self, score_id: Uuid) -> Result<Score> {
        let score = self
            .scores
            .iter_mut()
            .find(|s| s.score_id == score_id)
            .ok_or(StorageError::NotFound("Score"))?;

        score.is_verified = true;
        score.updated_at = now();
        Ok(score.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(game_id: Uuid, player_id: Uuid, points: u32) -> Score {
        let timestamp = now();
        Score {
            score_id: Uuid::new_v4(),
            game_id,
            player_id,
            holes: Vec::new(),
            total_strokes: 0,
            total_net_strokes: 0,
            total_stableford_points: points,
            is_verified: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_upsert_replaces_same_game_and_player() {
        let mut store = MemoryStore::new();
        let (game, player) = (Uuid::new_v4(), Uuid::new_v4());

        let first = store.upsert(score(game, player, 10));
        let mut second = first.clone();
        second.total_stableford_points = 14;
        store.upsert(second);

        let rows = store.find_scores_by_game(game);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score_id, first.score_id);
        assert_eq!(rows[0].total_stableford_points, 14);
    }

    #[test]
    fn test_scores_by_player_filters_verified() {
        let mut store = MemoryStore::new();
        let player = Uuid::new_v4();
        let a = store.upsert(score(Uuid::new_v4(), player, 10));
        store.upsert(score(Uuid::new_v4(), player, 20));
        store.upsert(score(Uuid::new_v4(), Uuid::new_v4(), 30));

        store.mark_verified(a.score_id).unwrap();

        assert_eq!(store.find_scores_by_player(player, false).len(), 2);
        let verified = store.find_scores_by_player(player, true);
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].score_id, a.score_id);
        assert!(verified[0].is_verified);
    }

    #[test]
    fn test_scores_by_player_in_creation_order() {
        let mut store = MemoryStore::new();
        let player = Uuid::new_v4();
        let points: Vec<u32> = (1..=5).collect();
        for p in &points {
            store.upsert(score(Uuid::new_v4(), player, *p));
        }

        let found: Vec<u32> = store
            .find_scores_by_player(player, false)
            .iter()
            .map(|s| s.total_stableford_points)
            .collect();
        assert_eq!(found, points);
    }

    #[test]
    fn test_mark_verified_unknown_score() {
        let mut store = MemoryStore::new();
        assert!(store.mark_verified(Uuid::new_v4()).unwrap_err().is_not_found());
        assert!(store.find_score_by_id(Uuid::new_v4()).is_err());
    }
}
