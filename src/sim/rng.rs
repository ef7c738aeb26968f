//! Random sources for keeper decisions
//!
//! The keeper policy only ever asks for a unit float or a uniform index, so
//! anything that can answer those two questions can drive it.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform randomness for the keeper
pub trait RandomSource {
    /// Uniform value in [0, 1)
    fn unit(&mut self) -> f32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize {
        let i = (self.unit() * len as f32) as usize;
        i.min(len.saturating_sub(1))
    }
}

/// Seeded PCG generator (reproducible per seed)
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: u64,
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRng {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
///
/// An empty script always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    script: Vec<f32>,
    queue: VecDeque<f32>,
    draws: usize,
}

impl ScriptedRolls {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let script: Vec<f32> = values.into_iter().collect();
        Self {
            queue: script.iter().copied().collect(),
            script,
            draws: 0,
        }
    }

    /// Number of values consumed so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRolls {
    fn unit(&mut self) -> f32 {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        self.draws += 1;
        self.queue.pop_front().unwrap_or(0.0)
    }
}
