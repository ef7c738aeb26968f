//! Shot resolution engine
//!
//! All gameplay decisions live here. This module must stay pure:
//! - Randomness only through `RandomSource`
//! - Time only through `tick(dt)`
//! - No rendering, audio playback or platform dependencies

pub mod difficulty;
pub mod keeper;
pub mod lane;
pub mod outcome;
pub mod rng;
pub mod state;
pub mod tick;

pub use difficulty::{Difficulty, ParseDifficultyError, keeper_reaction_time};
pub use keeper::select_keeper_target;
pub use lane::{Direction, LANES, ParseDirectionError, is_lane};
pub use outcome::{Outcome, is_save, outcome_for, resolve_shot};
pub use rng::{RandomSource, ScriptedRolls, SeededRng};
pub use state::{MatchState, ShotError, ShotPhase, ShotPlan, ShotReport, SnapshotError};
pub use tick::{reset_positions, resolve_pending, shoot, tick};
