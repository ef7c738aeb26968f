//! Outcome cues
//!
//! The engine only says which cue to play. Actual playback belongs to the
//! host, plugged in through [`CuePlayer`].

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball hits the net
    Goal,
    /// Keeper stops it
    Save,
}

impl SoundEffect {
    /// Conventional asset file name for this cue
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Goal => "goal.wav",
            SoundEffect::Save => "save.wav",
        }
    }
}

/// Host playback backend
pub trait CuePlayer {
    /// Play `effect` at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that just logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogCuePlayer;

impl CuePlayer for LogCuePlayer {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::info!("Cue {} (vol {:.2})", effect.asset_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<P: CuePlayer> {
    player: Option<P>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<P: CuePlayer> AudioManager<P> {
    /// `None` means no backend could be loaded; cues are then skipped
    pub fn new(player: Option<P>) -> Self {
        if player.is_none() {
            log::warn!("No audio backend - cues disabled");
        }
        Self {
            player,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build from stored preferences
    pub fn from_settings(player: Option<P>, settings: &Settings) -> Self {
        let mut audio = Self::new(player);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(!settings.sound);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a cue. Returns false if it was skipped.
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return false;
        }
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        player.play(effect, vol);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl CuePlayer for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_play_uses_effective_volume() {
        let mut audio = AudioManager::new(Some(Recorder::default()));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(0.5);
        assert!(audio.play(SoundEffect::Goal));
        let played = &audio.player.as_ref().unwrap().0;
        assert_eq!(played.as_slice(), &[(SoundEffect::Goal, 0.25)]);
    }

    #[test]
    fn test_muted_skips_cue() {
        let mut audio = AudioManager::new(Some(Recorder::default()));
        audio.set_muted(true);
        assert!(!audio.play(SoundEffect::Save));
        assert!(audio.player.as_ref().unwrap().0.is_empty());
    }

    #[test]
    fn test_missing_backend_is_not_an_error() {
        let mut audio: AudioManager<Recorder> = AudioManager::new(None);
        assert!(!audio.play(SoundEffect::Goal));
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(Some(LogCuePlayer));
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(1.0);
        assert_eq!(audio.effective_volume(), 1.0);
    }

    #[test]
    fn test_from_settings_respects_sound_toggle() {
        let settings = Settings {
            sound: false,
            ..Settings::default()
        };
        let audio = AudioManager::from_settings(Some(LogCuePlayer), &settings);
        assert_eq!(audio.effective_volume(), 0.0);
    }
}
