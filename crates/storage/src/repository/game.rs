use uuid::Uuid;

use super::memory::{MemoryStore, now};
use super::{GameStore, PlayerStore};
use crate::dto::game::{CreateGameRequest, UpdateGameRequest};
use crate::error::{Result, StorageError};
use crate::models::Game;

impl GameStore for MemoryStore {
    fn get_game(&self, game_id: Uuid) -> Result<Game> {
        self.games
            .iter()
            .find(|g| g.game_id == game_id)
            .cloned()
            .ok_or(StorageError::NotFound("Game"))
    }

    fn set_completion_flags(
        &mut self,
        game_id: Uuid,
        is_complete: bool,
        is_verified: bool,
    ) -> Result<Game> {
        let game = self.game_mut(game_id)?;
        game.is_complete = is_complete;
        game.is_verified = is_verified;
        game.updated_at = now();
        Ok(game.clone())
    }
}

impl MemoryStore {
    /// List games by date, then tee time
    pub fn list_games(&self) -> Vec<Game> {
        let mut games = self.games.clone();
        games.sort_by_key(|g| (g.date, g.tee_time));
        games
    }

    /// Schedule a game. Every player must already be registered.
    pub fn create_game(&mut self, req: &CreateGameRequest) -> Result<Game> {
        let players = self.resolve_players(&req.players)?;

        let timestamp = now();
        let game = Game {
            game_id: Uuid::new_v4(),
            date: req.date,
            course_side: req.course_side,
            tee_time: req.tee_time,
            players,
            is_complete: false,
            is_verified: false,
            created_at: timestamp,
            updated_at: timestamp,
        };
        self.games.push(game.clone());

        Ok(game)
    }

    /// Admin edit, including out-of-band overrides of the completion flags
    pub fn update_game(&mut self, game_id: Uuid, req: &UpdateGameRequest) -> Result<Game> {
        let players = match &req.players {
            Some(ids) => Some(self.resolve_players(ids)?),
            None => None,
        };

        if let Some(side) = req.course_side {
            let current = self.get_game(game_id)?;
            if side != current.course_side && self.scores.iter().any(|s| s.game_id == game_id) {
                return Err(StorageError::ConstraintViolation(
                    "Cannot change the course side of a game with scores".to_string(),
                ));
            }
        }

        let game = self.game_mut(game_id)?;
        if let Some(date) = req.date {
            game.date = date;
        }
        if let Some(side) = req.course_side {
            game.course_side = side;
        }
        if let Some(tee_time) = req.tee_time {
            game.tee_time = tee_time;
        }
        if let Some(players) = players {
            game.players = players;
        }
        if let Some(is_complete) = req.is_complete {
            game.is_complete = is_complete;
        }
        if let Some(is_verified) = req.is_verified {
            game.is_verified = is_verified;
        }
        game.updated_at = now();

        Ok(game.clone())
    }

    /// Delete a game together with its scores
    pub fn delete_game(&mut self, game_id: Uuid) -> Result<()> {
        self.get_game(game_id)?;

        self.scores.retain(|s| s.game_id != game_id);
        self.games.retain(|g| g.game_id != game_id);
        Ok(())
    }

    fn game_mut(&mut self, game_id: Uuid) -> Result<&mut Game> {
        self.games
            .iter_mut()
            .find(|g| g.game_id == game_id)
            .ok_or(StorageError::NotFound("Game"))
    }

    /// Checks every id and drops duplicates, keeping first occurrence.
    fn resolve_players(&self, ids: &[Uuid]) -> Result<Vec<Uuid>> {
        let mut players = Vec::with_capacity(ids.len());
        for &id in ids {
            self.get_player(id)?;
            if !players.contains(&id) {
                players.push(id);
            }
        }
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::player::CreatePlayerRequest;
    use crate::models::{CourseSide, Gender, TeeColor};
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn add_player(store: &mut MemoryStore, email: &str) -> Uuid {
        store
            .create_player(&CreatePlayerRequest {
                name: email.to_string(),
                email: email.to_string(),
                gender: Gender::Male,
                handicap: Decimal::new(18, 0),
                preferred_tee: TeeColor::White,
            })
            .unwrap()
            .player_id
    }

    fn game_request(players: Vec<Uuid>, day: u32) -> CreateGameRequest {
        CreateGameRequest {
            date: NaiveDate::from_ymd_opt(2026, 5, day).unwrap(),
            course_side: CourseSide::Front9,
            tee_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            players,
        }
    }

    #[test]
    fn test_create_collapses_duplicate_players() {
        let mut store = MemoryStore::new();
        let a = add_player(&mut store, "a@example.com");
        let b = add_player(&mut store, "b@example.com");

        let game = store.create_game(&game_request(vec![a, b, a], 3)).unwrap();
        assert_eq!(game.players, vec![a, b]);
        assert!(!game.is_complete);
        assert!(!game.is_verified);
    }

    #[test]
    fn test_create_with_unknown_player_fails() {
        let mut store = MemoryStore::new();
        let err = store
            .create_game(&game_request(vec![Uuid::new_v4()], 3))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.list_games().is_empty());
    }

    #[test]
    fn test_list_orders_by_date() {
        let mut store = MemoryStore::new();
        let a = add_player(&mut store, "a@example.com");
        let later = store.create_game(&game_request(vec![a], 20)).unwrap();
        let earlier = store.create_game(&game_request(vec![a], 2)).unwrap();

        let ids: Vec<Uuid> = store.list_games().iter().map(|g| g.game_id).collect();
        assert_eq!(ids, vec![earlier.game_id, later.game_id]);
    }

    #[test]
    fn test_admin_can_override_flags() {
        let mut store = MemoryStore::new();
        let a = add_player(&mut store, "a@example.com");
        let game = store.create_game(&game_request(vec![a], 3)).unwrap();

        let updated = store
            .update_game(
                game.game_id,
                &UpdateGameRequest {
                    is_complete: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.is_complete);
        assert!(!updated.is_verified);
    }
}
