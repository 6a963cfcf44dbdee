use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::CourseSide;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Game {
    pub game_id: Uuid,
    pub date: NaiveDate,
    pub course_side: CourseSide,
    pub tee_time: NaiveTime,
    /// Registered players. Treated as a set; order carries no meaning.
    pub players: Vec<Uuid>,
    pub is_complete: bool,
    pub is_verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Game {
    pub fn has_player(&self, player_id: Uuid) -> bool {
        self.players.contains(&player_id)
    }
}
