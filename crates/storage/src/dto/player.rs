use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Gender, TeeColor};

pub const MAX_HANDICAP: Decimal = Decimal::from_parts(54, 0, 0, false, 0);

/// Request payload for registering a new player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    pub gender: Gender,

    #[validate(custom(function = "validate_handicap"))]
    pub handicap: Decimal,

    #[serde(default)]
    pub preferred_tee: TeeColor,
}

/// Request payload for an admin edit of a player.
///
/// Setting `handicap` here overrides whatever the adjuster computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePlayerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub gender: Option<Gender>,

    #[validate(custom(function = "validate_handicap"))]
    pub handicap: Option<Decimal>,

    pub preferred_tee: Option<TeeColor>,
}

fn validate_handicap(handicap: &Decimal) -> Result<(), validator::ValidationError> {
    if handicap.is_sign_negative() || *handicap > MAX_HANDICAP {
        return Err(validator::ValidationError::new("handicap_out_of_range")
            .with_message("Handicap must be between 0 and 54".into()));
    }
    if handicap.normalize().scale() > 1 {
        return Err(validator::ValidationError::new("handicap_precision")
            .with_message("Handicap must have at most one decimal place".into()));
    }
    Ok(())
}
