use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Season standing built from verified scores only
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_id: Uuid,
    pub name: String,
    pub handicap: Decimal,
    pub rounds_played: usize,
    pub total_points: u32,
    pub average_points: Decimal,
    pub best_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GameLeaderboardEntry {
    pub rank: usize,
    pub player_id: Uuid,
    pub name: String,
    pub total_strokes: u32,
    pub total_net_strokes: u32,
    pub total_stableford_points: u32,
    pub is_verified: bool,
}
