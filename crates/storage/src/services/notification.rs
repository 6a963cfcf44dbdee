use rust_decimal::Decimal;

use crate::models::NotificationKind;

/// Something a player or admin might want to hear about.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreEvent {
    Saved { player_name: String, points: u32 },
    Verified { player_name: String, points: u32 },
    HandicapChanged {
        player_name: String,
        previous: Decimal,
        new: Decimal,
    },
}

impl ScoreEvent {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Saved { .. } => NotificationKind::ScoreSaved,
            Self::Verified { .. } => NotificationKind::ScoreVerified,
            Self::HandicapChanged { .. } => NotificationKind::HandicapChanged,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Saved {
                player_name,
                points,
            } => format!("Score saved for {player_name}: {points} points"),
            Self::Verified {
                player_name,
                points,
            } => format!("Score verified for {player_name}: {points} points"),
            Self::HandicapChanged {
                player_name,
                previous,
                new,
            } => format!("Handicap for {player_name} changed from {previous} to {new}"),
        }
    }
}

/// Fire-and-forget receiver for score events. Nothing it does feeds back into
/// scoring.
pub trait NotificationSink {
    fn notify(&mut self, event: ScoreEvent);
}
