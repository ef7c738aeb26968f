//! Goal/save decision

use serde::{Deserialize, Serialize};

use super::lane::Direction;
use super::state::{MatchState, ShotReport};
use crate::audio::SoundEffect;
use crate::consts::SAVE_THRESHOLD;

/// Result of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Goal,
    Save,
}

impl Outcome {
    /// Cue the presentation layer should play
    pub fn cue(&self) -> SoundEffect {
        match self {
            Outcome::Goal => SoundEffect::Goal,
            Outcome::Save => SoundEffect::Save,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Goal => "GOAL",
            Outcome::Save => "SAVE",
        }
    }
}

/// Keeper gets a hand to it when within the save threshold.
///
/// With three discrete lanes this is an exact lane match.
pub fn is_save(ball_lane: f32, keeper_lane: f32) -> bool {
    (ball_lane - keeper_lane).abs() < SAVE_THRESHOLD
}

/// Outcome of a shot at `direction` against a keeper diving to `keeper_target`
pub fn outcome_for(direction: Direction, keeper_target: f32) -> Outcome {
    if is_save(direction.lane(), keeper_target) {
        Outcome::Save
    } else {
        Outcome::Goal
    }
}

/// Decide the shot and count it against `state`
pub fn resolve_shot(
    state: &mut MatchState,
    direction: Direction,
    keeper_target: f32,
) -> ShotReport {
    let outcome = outcome_for(direction, keeper_target);
    state.record(outcome);
    log::debug!(
        "{} shot vs keeper at {:.2}: {} ({})",
        direction,
        keeper_target,
        outcome.as_str(),
        state.score_label()
    );
    ShotReport {
        direction,
        outcome,
        ball_lane: direction.lane(),
        keeper_lane: keeper_target,
        score: state.score(),
        shots_taken: state.shots_taken(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::lane::LANES;

    #[test]
    fn test_center_vs_center_is_saved() {
        assert_eq!(outcome_for(Direction::Center, 0.50), Outcome::Save);
    }

    #[test]
    fn test_left_vs_right_is_a_goal() {
        assert_eq!(outcome_for(Direction::Left, 0.65), Outcome::Goal);
    }

    #[test]
    fn test_save_iff_same_lane() {
        for d in Direction::ALL {
            for keeper in LANES {
                let expected = if keeper == d.lane() { Outcome::Save } else { Outcome::Goal };
                assert_eq!(outcome_for(d, keeper), expected, "{d} vs {keeper}");
            }
        }
    }

    #[test]
    fn test_adjacent_lanes_never_save() {
        // 0.15 apart, well outside the threshold
        assert!(!is_save(0.35, 0.50));
        assert!(!is_save(0.50, 0.65));
    }

    #[test]
    fn test_cues() {
        assert_eq!(Outcome::Goal.cue(), SoundEffect::Goal);
        assert_eq!(Outcome::Save.cue(), SoundEffect::Save);
    }

    #[test]
    fn test_resolve_shot_updates_score() {
        let mut state = MatchState::new(Difficulty::Easy);

        let report = resolve_shot(&mut state, Direction::Left, 0.65);
        assert_eq!(report.outcome, Outcome::Goal);
        assert_eq!((report.score, report.shots_taken), (1, 1));
        assert_eq!(report.ball_lane, 0.35);
        assert_eq!(report.keeper_lane, 0.65);

        let report = resolve_shot(&mut state, Direction::Center, 0.50);
        assert_eq!(report.outcome, Outcome::Save);
        assert_eq!((report.score, report.shots_taken), (1, 2));
        assert_eq!(state.score(), 1);
        assert_eq!(state.shots_taken(), 2);
    }
}
