use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which nine holes a game is played over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseSide {
    Front9,
    Back9,
}

impl CourseSide {
    pub fn holes(&self) -> &'static [HoleInfo] {
        match self {
            Self::Front9 => &FRONT_NINE,
            Self::Back9 => &BACK_NINE,
        }
    }

    pub fn par(&self) -> u32 {
        self.holes().iter().map(|h| u32::from(h.par)).sum()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeeColor {
    #[default]
    White,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Yardage {
    pub white: u16,
    pub yellow: u16,
    pub red: u16,
}

/// Reference data for a single hole.
///
/// Stroke index ranks holes across the full eighteen (1 = hardest) and decides
/// where handicap strokes are received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HoleInfo {
    pub hole_number: u8,
    pub par: u8,
    pub stroke_index: u8,
    pub yardage: Yardage,
}

impl HoleInfo {
    pub fn yardage_for(&self, tee: TeeColor) -> u16 {
        match tee {
            TeeColor::White => self.yardage.white,
            TeeColor::Yellow => self.yardage.yellow,
            TeeColor::Red => self.yardage.red,
        }
    }
}

const fn hole(hole_number: u8, par: u8, stroke_index: u8, white: u16, yellow: u16, red: u16) -> HoleInfo {
    HoleInfo {
        hole_number,
        par,
        stroke_index,
        yardage: Yardage { white, yellow, red },
    }
}

static FRONT_NINE: [HoleInfo; 9] = [
    hole(1, 4, 7, 380, 365, 330),
    hole(2, 3, 15, 165, 150, 130),
    hole(3, 5, 3, 510, 495, 440),
    hole(4, 4, 1, 425, 410, 370),
    hole(5, 4, 11, 350, 335, 300),
    hole(6, 3, 17, 140, 130, 115),
    hole(7, 5, 5, 525, 505, 450),
    hole(8, 4, 9, 390, 375, 335),
    hole(9, 4, 13, 360, 345, 310),
];

static BACK_NINE: [HoleInfo; 9] = [
    hole(10, 4, 8, 400, 385, 345),
    hole(11, 4, 2, 435, 420, 380),
    hole(12, 3, 16, 175, 160, 135),
    hole(13, 5, 6, 530, 510, 455),
    hole(14, 4, 12, 365, 350, 315),
    hole(15, 4, 4, 415, 400, 360),
    hole(16, 3, 18, 150, 140, 120),
    hole(17, 5, 10, 500, 485, 430),
    hole(18, 4, 14, 370, 355, 320),
];
