pub mod completion;
pub mod handicap;
pub mod notification;
pub mod scoring;
pub mod stableford;
