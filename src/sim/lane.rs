//! Shot directions and the lane lookup table
//!
//! Ball targets and keeper targets both come from [`LANES`], so the two sides
//! of the save comparison always use identical constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{LANE_CENTER, LANE_LEFT, LANE_RIGHT};

/// Player's shot direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Center,
    Right,
}

/// Lane positions indexed by [`Direction::index`]
pub const LANES: [f32; 3] = [LANE_LEFT, LANE_CENTER, LANE_RIGHT];

/// The two lanes either side of center
pub const WIDE_LANES: [f32; 2] = [LANE_LEFT, LANE_RIGHT];

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Center, Direction::Right];

    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Center => 1,
            Direction::Right => 2,
        }
    }

    /// Lane position this direction maps to
    pub fn lane(self) -> f32 {
        LANES[self.index()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Center => "CENTER",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?} (expected left, center or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "center" | "centre" | "c" => Ok(Direction::Center),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// True if `x` is exactly one of the three lane constants
pub fn is_lane(x: f32) -> bool {
    LANES.contains(&x)
}
