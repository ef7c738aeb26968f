//! Difficulty selection and session lifecycle

use crate::sim::{Difficulty, MatchState};

pub const PROMPT_CHOOSE: &str = "Choose difficulty";
pub const PROMPT_CHOOSE_FIRST: &str = "Choose difficulty first!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum KickoffError {
    #[error("{}", PROMPT_CHOOSE_FIRST)]
    NoDifficulty,
    #[error("a match is already in progress")]
    AlreadyPlaying,
}

/// Difficulty selection screen state
#[derive(Debug, Clone, PartialEq)]
pub struct Lobby {
    selected: Option<Difficulty>,
    /// Prompt shown under the title
    pub message: String,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

impl Lobby {
    pub fn new() -> Self {
        Self {
            selected: None,
            message: PROMPT_CHOOSE.to_string(),
        }
    }

    pub fn selected(&self) -> Option<Difficulty> {
        self.selected
    }

    pub fn select(&mut self, difficulty: Difficulty) {
        self.selected = Some(difficulty);
        self.message = format!("{} selected", difficulty);
    }

    /// Start a match with the selected difficulty
    pub fn kick_off(&mut self) -> Result<MatchState, KickoffError> {
        let Some(difficulty) = self.selected else {
            self.message = PROMPT_CHOOSE_FIRST.to_string();
            return Err(KickoffError::NoDifficulty);
        };
        log::info!("Kick off on {}", difficulty);
        Ok(MatchState::new(difficulty))
    }
}

/// Which screen the player is on. Each match owns its own `MatchState`.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Lobby(Lobby),
    Match(MatchState),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Lobby(Lobby::new())
    }
}

impl Screen {
    /// Move from the lobby into a fresh match
    pub fn kick_off(&mut self) -> Result<&mut MatchState, KickoffError> {
        let Screen::Lobby(lobby) = self else {
            return Err(KickoffError::AlreadyPlaying);
        };
        *self = Screen::Match(lobby.kick_off()?);
        match self {
            Screen::Match(state) => Ok(state),
            Screen::Lobby(_) => Err(KickoffError::AlreadyPlaying),
        }
    }

    /// Leave the match. Its score is discarded.
    pub fn back_to_lobby(&mut self) {
        if let Screen::Match(state) = self {
            log::info!(
                "Match over: {} from {} shots",
                state.score(),
                state.shots_taken()
            );
        }
        *self = Screen::Lobby(Lobby::new());
    }

    pub fn lobby_mut(&mut self) -> Option<&mut Lobby> {
        match self {
            Screen::Lobby(lobby) => Some(lobby),
            Screen::Match(_) => None,
        }
    }
}
