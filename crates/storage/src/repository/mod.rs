//! Store interfaces consumed by the scoring services, plus the in-memory
//! implementation that backs the API.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{CourseSide, Game, HoleInfo, Player, Score};

pub mod game;
pub mod leaderboard;
pub mod memory;
pub mod notification;
pub mod player;
pub mod score;

pub use memory::MemoryStore;
pub use notification::NotificationLog;

/// Source of hole metadata for each side of the course.
pub trait CourseData {
    fn holes(&self, side: CourseSide) -> &[HoleInfo];
}

/// The club's own course, compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeCourse;

impl CourseData for HomeCourse {
    fn holes(&self, side: CourseSide) -> &[HoleInfo] {
        side.holes()
    }
}

pub trait PlayerStore {
    fn get_player(&self, player_id: Uuid) -> Result<Player>;

    fn set_handicap(&mut self, player_id: Uuid, handicap: Decimal) -> Result<()>;
}

pub trait ScoreStore {
    fn find_score(&self, game_id: Uuid, player_id: Uuid) -> Option<Score>;

    fn find_score_by_id(&self, score_id: Uuid) -> Result<Score>;

    /// Scores for a player in ascending creation order.
    fn find_scores_by_player(&self, player_id: Uuid, verified_only: bool) -> Vec<Score>;

    fn find_scores_by_game(&self, game_id: Uuid) -> Vec<Score>;

    /// Inserts the score, or replaces the row with the same (game, player).
    fn upsert(&mut self, score: Score) -> Score;

    fn mark_verified(&mut self, score_id: Uuid) -> Result<Score>;
}

pub trait GameStore {
    fn get_game(&self, game_id: Uuid) -> Result<Game>;

    fn set_completion_flags(
        &mut self,
        game_id: Uuid,
        is_complete: bool,
        is_verified: bool,
    ) -> Result<Game>;
}
