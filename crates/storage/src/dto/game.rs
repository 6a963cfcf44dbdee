use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::CourseSide;

/// Request payload for scheduling a game
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGameRequest {
    pub date: NaiveDate,

    pub course_side: CourseSide,

    pub tee_time: NaiveTime,

    #[validate(length(min = 1, message = "A game needs at least one player"))]
    pub players: Vec<Uuid>,
}

/// Request payload for an admin edit of a game.
///
/// The completion flags are normally derived from verified scores; setting them
/// here is an explicit override.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGameRequest {
    pub date: Option<NaiveDate>,

    pub course_side: Option<CourseSide>,

    pub tee_time: Option<NaiveTime>,

    #[validate(length(min = 1))]
    pub players: Option<Vec<Uuid>>,

    pub is_complete: Option<bool>,

    pub is_verified: Option<bool>,
}
