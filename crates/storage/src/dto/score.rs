use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{HoleScore, Score};
use crate::services::handicap::HandicapChange;
use crate::services::stableford::RoundTotals;

/// Raw strokes for one hole as entered on the card. Zero means not played yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct HoleStrokes {
    #[validate(range(min = 1, max = 18, message = "Hole number must be between 1 and 18"))]
    pub hole_number: u8,

    #[validate(range(min = 0, max = 30, message = "Strokes must be between 0 and 30"))]
    pub strokes: i32,
}

/// Request payload for saving (or re-saving) a player's card for a game
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveScoreRequest {
    pub player_id: Uuid,

    #[validate(length(min = 1, max = 9, message = "Between 1 and 9 holes must be submitted"))]
    #[validate(nested)]
    pub holes: Vec<HoleStrokes>,
}

/// Live calculation for a card that has not been saved
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorePreviewResponse {
    pub player_id: Uuid,
    pub holes: Vec<HoleScore>,
    pub totals: RoundTotals,
    pub is_round_complete: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VerifyScoreResponse {
    pub score: Score,
    pub handicap_change: Option<HandicapChange>,
    pub game_completed: bool,
}
