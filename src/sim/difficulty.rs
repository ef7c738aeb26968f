//! Difficulty levels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keeper difficulty, fixed for the whole match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Keeper dives to a random lane
    Easy,
    /// Keeper favors the middle, otherwise guesses a side
    Medium,
    /// Keeper reads the shot every time
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// Keeper dive animation duration in seconds.
    ///
    /// Purely visual: the outcome is decided on a fixed delay regardless.
    pub fn keeper_reaction_time(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.6,
            Difficulty::Medium => 0.4,
            Difficulty::Hard => 0.25,
        }
    }
}

/// Keeper dive duration for `difficulty` (seconds)
pub fn keeper_reaction_time(difficulty: Difficulty) -> f32 {
    difficulty.keeper_reaction_time()
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_times() {
        assert_eq!(keeper_reaction_time(Difficulty::Easy), 0.6);
        assert_eq!(keeper_reaction_time(Difficulty::Medium), 0.4);
        assert_eq!(keeper_reaction_time(Difficulty::Hard), 0.25);
    }

    #[test]
    fn test_harder_keepers_dive_faster() {
        let times: Vec<f32> = Difficulty::ALL.iter().map(|d| d.keeper_reaction_time()).collect();
        assert!(times.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Med".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(ParseDifficultyError("insane".to_string()))
        );
    }
}
