//! Penalty Shootout - an arcade penalty kick game
//!
//! Core modules:
//! - `sim`: Shot resolution engine (keeper policy, outcome, match state)
//! - `lobby`: Difficulty selection and the switch into a match
//! - `audio`: Outcome cues for the host presentation layer
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod lobby;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, CuePlayer, SoundEffect};
pub use lobby::{KickoffError, Lobby, Screen};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Lane positions in normalized goal space (LEFT, CENTER, RIGHT)
    pub const LANE_LEFT: f32 = 0.35;
    pub const LANE_CENTER: f32 = 0.50;
    pub const LANE_RIGHT: f32 = 0.65;

    /// Ball and keeper lanes closer than this count as a save.
    /// Lanes are 0.15 apart, so this only ever matches the same lane.
    pub const SAVE_THRESHOLD: f32 = 0.05;

    /// Delay from shot to outcome, independent of keeper dive speed
    pub const RESOLVE_DELAY_SECS: f32 = 0.6;
    /// Ball flight animation duration
    pub const BALL_FLIGHT_SECS: f32 = 0.5;

    /// Fixed timestep for the headless driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Where the ball rests before a kick
    pub const BALL_SPOT: Vec2 = Vec2::new(0.5, 0.1);
    /// Height the ball reaches at the goal line
    pub const BALL_TARGET_Y: f32 = 0.6;
    /// Where the keeper stands between shots
    pub const KEEPER_HOME: Vec2 = Vec2::new(0.5, 0.55);
}
