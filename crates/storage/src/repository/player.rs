use rust_decimal::Decimal;
use uuid::Uuid;

use super::memory::{MemoryStore, now};
use super::PlayerStore;
use crate::dto::player::{CreatePlayerRequest, UpdatePlayerRequest};
use crate::error::{Result, StorageError};
use crate::models::Player;

impl PlayerStore for MemoryStore {
    fn get_player(&self, player_id: Uuid) -> Result<Player> {
        self.players
            .iter()
            .find(|p| p.player_id == player_id)
            .cloned()
            .ok_or(StorageError::NotFound("Player"))
    }

    fn set_handicap(&mut self, player_id: Uuid, handicap: Decimal) -> Result<()> {
        let player = self.player_mut(player_id)?;
        player.handicap = handicap;
        player.updated_at = now();
        Ok(())
    }
}

impl MemoryStore {
    /// List all players, alphabetically
    pub fn list_players(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by_key(|p| p.name.to_lowercase());
        players
    }

    /// Register a new player
    pub fn create_player(&mut self, req: &CreatePlayerRequest) -> Result<Player> {
        self.ensure_email_free(&req.email, None)?;

        let timestamp = now();
        let player = Player {
            player_id: Uuid::new_v4(),
            name: req.name.clone(),
            email: req.email.clone(),
            gender: req.gender,
            handicap: req.handicap,
            preferred_tee: req.preferred_tee,
            created_at: timestamp,
            updated_at: timestamp,
        };
        self.players.push(player.clone());

        Ok(player)
    }

    /// Admin edit. A handicap given here bypasses the adjuster.
    pub fn update_player(&mut self, player_id: Uuid, req: &UpdatePlayerRequest) -> Result<Player> {
        if let Some(email) = &req.email {
            self.ensure_email_free(email, Some(player_id))?;
        }

        let player = self.player_mut(player_id)?;
        if let Some(name) = &req.name {
            player.name = name.clone();
        }
        if let Some(email) = &req.email {
            player.email = email.clone();
        }
        if let Some(gender) = req.gender {
            player.gender = gender;
        }
        if let Some(handicap) = req.handicap {
            player.handicap = handicap;
        }
        if let Some(tee) = req.preferred_tee {
            player.preferred_tee = tee;
        }
        player.updated_at = now();

        Ok(player.clone())
    }

    /// Delete a player who has no scores and is not entered in any game
    pub fn delete_player(&mut self, player_id: Uuid) -> Result<()> {
        self.get_player(player_id)?;

        if self.scores.iter().any(|s| s.player_id == player_id) {
            return Err(StorageError::ConstraintViolation(
                "Player has recorded scores".to_string(),
            ));
        }
        if self.games.iter().any(|g| g.has_player(player_id)) {
            return Err(StorageError::ConstraintViolation(
                "Player is entered in a game".to_string(),
            ));
        }

        self.players.retain(|p| p.player_id != player_id);
        Ok(())
    }

    fn player_mut(&mut self, player_id: Uuid) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.player_id == player_id)
            .ok_or(StorageError::NotFound("Player"))
    }

    fn ensure_email_free(&self, email: &str, except: Option<Uuid>) -> Result<()> {
        let taken = self
            .players
            .iter()
            .any(|p| Some(p.player_id) != except && p.email.eq_ignore_ascii_case(email));

        if taken {
            return Err(StorageError::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }
        Ok(())
    }
}
