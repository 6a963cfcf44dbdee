use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CourseSide, HoleInfo};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseSideResponse {
    pub side: CourseSide,
    pub par: u32,
    pub holes: Vec<HoleInfo>,
}

impl From<CourseSide> for CourseSideResponse {
    fn from(side: CourseSide) -> Self {
        Self {
            side,
            par: side.par(),
            holes: side.holes().to_vec(),
        }
    }
}
