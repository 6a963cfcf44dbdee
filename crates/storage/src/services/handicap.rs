use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::player::MAX_HANDICAP;
use crate::error::Result;
use crate::repository::{PlayerStore, ScoreStore};

/// How many of the latest verified rounds feed the adjustment.
pub const ROUND_WINDOW: usize = 3;

/// Above this average the handicap is cut.
const CUT_ABOVE: Decimal = Decimal::from_parts(18, 0, 0, false, 0);
/// Below this average the handicap is raised.
const RAISE_BELOW: Decimal = Decimal::from_parts(16, 0, 0, false, 0);

const CUT_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const RAISE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
const MIN_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
const MAX_CUT: Decimal = Decimal::TWO;
const MAX_RAISE: Decimal = Decimal::ONE;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HandicapChange {
    pub player_id: Uuid,
    pub previous: Decimal,
    pub new: Decimal,
    pub average_points: Decimal,
}

/// Mean points over the last [`ROUND_WINDOW`] entries, `None` when empty.
pub fn recent_average(points_oldest_first: &[u32]) -> Option<Decimal> {
    let start = points_oldest_first.len().saturating_sub(ROUND_WINDOW);
    let window = &points_oldest_first[start..];
    if window.is_empty() {
        return None;
    }

    let total: u32 = window.iter().sum();
    Some(Decimal::from(total) / Decimal::from(window.len() as u32))
}

/// Applies the deadband rule to `current` and rounds to one decimal.
///
/// 16 to 18 points inclusive leaves the handicap alone. The result is always
/// within 0 to 54.
pub fn adjusted_handicap(current: Decimal, average_points: Decimal) -> Decimal {
    let adjusted = if average_points > CUT_ABOVE {
        let cut = ((average_points - CUT_ABOVE) * CUT_RATE).clamp(MIN_STEP, MAX_CUT);
        current - cut
    } else if average_points < RAISE_BELOW {
        let raise = ((RAISE_BELOW - average_points) * RAISE_RATE).clamp(MIN_STEP, MAX_RAISE);
        current + raise
    } else {
        current
    };

    round_to_tenth(adjusted.clamp(Decimal::ZERO, MAX_HANDICAP))
}

/// Half away from zero: 2.25 becomes 2.3.
pub fn round_to_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Recomputes a player's handicap from their verified rounds and stores it
/// when it moves. Returns the change, if any.
pub fn adjust_handicap<S>(store: &mut S, player_id: Uuid) -> Result<Option<HandicapChange>>
where
    S: PlayerStore + ScoreStore,
{
    let player = store.get_player(player_id)?;
    let points: Vec<u32> = store
        .find_scores_by_player(player_id, true)
        .iter()
        .map(|s| s.total_stableford_points)
        .collect();

    let Some(average_points) = recent_average(&points) else {
        return Ok(None);
    };

    let new = adjusted_handicap(player.handicap, average_points);
    if new == player.handicap {
        tracing::debug!(%player_id, %average_points, "Handicap unchanged");
        return Ok(None);
    }

    store.set_handicap(player_id, new)?;
    tracing::info!(
        %player_id,
        previous = %player.handicap,
        new = %new,
        %average_points,
        "Handicap adjusted"
    );

    Ok(Some(HandicapChange {
        player_id,
        previous: player.handicap,
        new,
        average_points,
    }))
}
