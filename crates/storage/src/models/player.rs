use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::TeeColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub player_id: Uuid,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    /// Playing handicap, 0.0 to 54.0 with one decimal place.
    pub handicap: Decimal,
    pub preferred_tee: TeeColor,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
