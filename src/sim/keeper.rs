//! Keeper placement policy

use super::difficulty::Difficulty;
use super::lane::{Direction, LANES, WIDE_LANES};
use super::rng::RandomSource;
use crate::consts::LANE_CENTER;

/// Chance a MEDIUM keeper stays in the middle
pub const MEDIUM_CENTER_BIAS: f32 = 0.5;

/// Pick the lane the keeper dives to.
///
/// - EASY: uniform over all three lanes, ignoring the shot
/// - MEDIUM: center half the time, otherwise a coin flip between the sides
/// - HARD: the shot's own lane (no randomness consumed)
pub fn select_keeper_target<R: RandomSource + ?Sized>(
    difficulty: Difficulty,
    direction: Direction,
    rng: &mut R,
) -> f32 {
    let target = match difficulty {
        Difficulty::Easy => LANES[rng.choose_index(LANES.len())],
        Difficulty::Medium => {
            if rng.unit() < MEDIUM_CENTER_BIAS {
                LANE_CENTER
            } else {
                WIDE_LANES[rng.choose_index(WIDE_LANES.len())]
            }
        }
        Difficulty::Hard => direction.lane(),
    };
    log::debug!("{} keeper vs {} shot -> lane {:.2}", difficulty, direction, target);
    target
}
