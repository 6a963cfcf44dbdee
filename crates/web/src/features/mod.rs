pub mod course;
pub mod games;
pub mod leaderboard;
pub mod notifications;
pub mod players;
pub mod scores;
