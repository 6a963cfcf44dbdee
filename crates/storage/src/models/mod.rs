mod course;
mod game;
mod notification;
mod player;
mod score;

pub use course::{CourseSide, HoleInfo, TeeColor, Yardage};
pub use game::Game;
pub use notification::{Notification, NotificationKind};
pub use player::{Gender, Player};
pub use score::{HoleScore, Score};
