//! Random draws behind an injectable source.
//!
//! Combat dice and mission assignment both consume randomness through the
//! [`RandomSource`] trait so that game logic stays deterministic under test.
//! [`SessionRandom`] seeds a PRNG once from the wall clock, matching
//! interactive play; [`ScriptedRandom`] replays a fixed sequence.

use crate::types::DIE_FACES;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing random draws (implemented by the session PRNG or a
/// scripted test source).
pub trait RandomSource {
    /// Roll one six-sided combat die, returning a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Draw a uniform index in `0..len`.
    ///
    /// Callers guarantee `len` is non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Session randomness: a `StdRng` seeded once at session start.
#[derive(Clone, Debug)]
pub struct SessionRandom {
    rng: StdRng,
}

impl SessionRandom {
    /// Seed from the current time, as an interactive session does.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        Self::with_seed(seed)
    }

    /// Seed explicitly for reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SessionRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SessionRandom {
    fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=DIE_FACES)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Fixed-sequence source for deterministic tests.
///
/// Values are consumed in order and wrap around when exhausted. Die rolls
/// clamp the scripted value into `1..=6`; index draws reduce it modulo `len`.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<u64>,
    next: usize,
}

impl ScriptedRandom {
    /// Create a source that replays `values` in order, cycling at the end.
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, next: 0 }
    }

    fn next_value(&mut self) -> u64 {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_die(&mut self) -> u8 {
        self.next_value().clamp(1, DIE_FACES as u64) as u8
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (self.next_value() as usize) % len
    }
}
