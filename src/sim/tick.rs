//! Shot lifecycle: kick, wait, resolve
//!
//! `shoot` commits the keeper's dive up front. The outcome is decided by
//! `tick` once `RESOLVE_DELAY_SECS` has passed, whatever the dive speed.

use glam::Vec2;

use super::keeper::select_keeper_target;
use super::lane::Direction;
use super::outcome::resolve_shot;
use super::rng::RandomSource;
use super::state::{MatchState, ShotError, ShotPhase, ShotPlan, ShotReport};
use crate::consts::*;

/// Slack for accumulated fixed-step float error
const TIMER_EPSILON: f32 = 1e-4;

/// Take a shot. Picks the keeper's target and starts the resolve timer.
pub fn shoot<R: RandomSource + ?Sized>(
    state: &mut MatchState,
    direction: Direction,
    rng: &mut R,
) -> Result<ShotPlan, ShotError> {
    if !state.is_awaiting_shot() {
        log::warn!("Ignoring {} shot: previous shot still in flight", direction);
        return Err(ShotError::ShotInFlight);
    }

    let keeper_lane = select_keeper_target(state.difficulty(), direction, rng);
    state.phase = ShotPhase::Resolving {
        direction,
        keeper_target: keeper_lane,
        elapsed: 0.0,
    };

    Ok(ShotPlan {
        direction,
        ball_lane: direction.lane(),
        keeper_lane,
        ball_target: Vec2::new(direction.lane(), BALL_TARGET_Y),
        keeper_target: Vec2::new(keeper_lane, KEEPER_HOME.y),
        ball_flight_secs: BALL_FLIGHT_SECS,
        keeper_dive_secs: state.difficulty().keeper_reaction_time(),
        resolve_delay_secs: RESOLVE_DELAY_SECS,
    })
}

/// Advance the resolve timer by `dt` seconds.
///
/// Returns the report on the tick the pending shot resolves, `None` otherwise.
/// Negative or non-finite `dt` counts as no time passing.
pub fn tick(state: &mut MatchState, dt: f32) -> Option<ShotReport> {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

    let ShotPhase::Resolving {
        direction,
        keeper_target,
        elapsed,
    } = state.phase
    else {
        return None;
    };

    let elapsed = elapsed + dt;
    if elapsed + TIMER_EPSILON < RESOLVE_DELAY_SECS {
        state.phase = ShotPhase::Resolving {
            direction,
            keeper_target,
            elapsed,
        };
        return None;
    }

    state.phase = ShotPhase::AwaitingShot;
    Some(resolve_shot(state, direction, keeper_target))
}

/// Resolve the pending shot now, for hosts that run their own timers
pub fn resolve_pending(state: &mut MatchState) -> Option<ShotReport> {
    match state.phase {
        ShotPhase::Resolving {
            direction,
            keeper_target,
            ..
        } => {
            state.phase = ShotPhase::AwaitingShot;
            Some(resolve_shot(state, direction, keeper_target))
        }
        ShotPhase::AwaitingShot => None,
    }
}

/// Rest positions both actors return to after a shot (ball, keeper)
pub fn reset_positions() -> (Vec2, Vec2) {
    (BALL_SPOT, KEEPER_HOME)
}
