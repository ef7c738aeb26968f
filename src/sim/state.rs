//! Match state and shot records
//!
//! A `MatchState` lives for one session: created at kick-off with the chosen
//! difficulty, dropped when the player goes back to difficulty selection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::lane::{Direction, is_lane};
use super::outcome::Outcome;
use crate::consts::{BALL_SPOT, BALL_TARGET_Y, KEEPER_HOME};

/// Where the current attempt is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShotPhase {
    /// Waiting for the player to pick a direction
    AwaitingShot,
    /// Ball in flight, outcome pending
    Resolving {
        direction: Direction,
        keeper_target: f32,
        /// Seconds since the shot was taken
        elapsed: f32,
    },
}

/// Rejected match snapshot
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("score {score} exceeds shots taken {shots_taken}")]
    ScoreExceedsShots { score: u32, shots_taken: u32 },
    #[error("keeper target {0} is not a lane")]
    OffLaneKeeper(f32),
    #[error("invalid shot timer {0}")]
    InvalidElapsed(f32),
}

/// Per-session score aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatchStateRepr")]
pub struct MatchState {
    difficulty: Difficulty,
    score: u32,
    shots_taken: u32,
    pub(crate) phase: ShotPhase,
}

/// Unchecked wire form of `MatchState`
#[derive(Deserialize)]
struct MatchStateRepr {
    difficulty: Difficulty,
    score: u32,
    shots_taken: u32,
    phase: ShotPhase,
}

impl TryFrom<MatchStateRepr> for MatchState {
    type Error = SnapshotError;

    fn try_from(repr: MatchStateRepr) -> Result<Self, Self::Error> {
        if repr.score > repr.shots_taken {
            return Err(SnapshotError::ScoreExceedsShots {
                score: repr.score,
                shots_taken: repr.shots_taken,
            });
        }
        if let ShotPhase::Resolving {
            keeper_target,
            elapsed,
            ..
        } = repr.phase
        {
            if !is_lane(keeper_target) {
                return Err(SnapshotError::OffLaneKeeper(keeper_target));
            }
            if !elapsed.is_finite() || elapsed < 0.0 {
                return Err(SnapshotError::InvalidElapsed(elapsed));
            }
        }
        Ok(Self {
            difficulty: repr.difficulty,
            score: repr.score,
            shots_taken: repr.shots_taken,
            phase: repr.phase,
        })
    }
}

impl MatchState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            score: 0,
            shots_taken: 0,
            phase: ShotPhase::AwaitingShot,
        }
    }

    /// Fixed at kick-off
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn shots_taken(&self) -> u32 {
        self.shots_taken
    }

    pub fn saves(&self) -> u32 {
        self.shots_taken.saturating_sub(self.score)
    }

    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    pub fn is_awaiting_shot(&self) -> bool {
        self.phase == ShotPhase::AwaitingShot
    }

    /// HUD text, e.g. "Score: 3"
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Where the ball and keeper should be heading (ball, keeper).
    ///
    /// Dive targets while a shot is in flight, otherwise the rest anchors.
    pub fn positions(&self) -> (Vec2, Vec2) {
        match self.phase {
            ShotPhase::AwaitingShot => (BALL_SPOT, KEEPER_HOME),
            ShotPhase::Resolving {
                direction,
                keeper_target,
                ..
            } => (
                Vec2::new(direction.lane(), BALL_TARGET_Y),
                Vec2::new(keeper_target, KEEPER_HOME.y),
            ),
        }
    }

    /// Count one resolved shot
    pub(crate) fn record(&mut self, outcome: Outcome) {
        self.shots_taken += 1;
        if outcome == Outcome::Goal {
            self.score += 1;
        }
    }
}

/// Everything the presentation layer needs to animate a shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotPlan {
    pub direction: Direction,
    pub ball_lane: f32,
    pub keeper_lane: f32,
    pub ball_target: Vec2,
    pub keeper_target: Vec2,
    pub ball_flight_secs: f32,
    /// Keeper dive duration (difficulty dependent)
    pub keeper_dive_secs: f32,
    /// Delay until the outcome is decided
    pub resolve_delay_secs: f32,
}

/// Result of one resolved shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotReport {
    pub direction: Direction,
    pub outcome: Outcome,
    pub ball_lane: f32,
    pub keeper_lane: f32,
    /// Score after this shot
    pub score: u32,
    /// Shots taken after this shot
    pub shots_taken: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShotError {
    #[error("a shot is already in flight")]
    ShotInFlight,
}
