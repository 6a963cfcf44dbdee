pub mod common;
pub mod course;
pub mod game;
pub mod leaderboard;
pub mod notification;
pub mod player;
pub mod score;
