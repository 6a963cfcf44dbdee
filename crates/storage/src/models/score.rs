use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Result for one played hole. `net_strokes` and `stableford_points` are
/// derived from `strokes` and never entered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HoleScore {
    pub hole_number: u8,
    pub strokes: u32,
    pub net_strokes: u32,
    pub stableford_points: u32,
}

/// A player's card for one game. At most one exists per (game, player).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub holes: Vec<HoleScore>,
    pub total_strokes: u32,
    pub total_net_strokes: u32,
    pub total_stableford_points: u32,
    pub is_verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
