//! Random and time sources consumed by the simulation
//!
//! The simulation only ever asks for bounded integers and a millisecond
//! counter, so both are small traits with a seeded/real implementation and a
//! scripted/fixed one for tests and replays.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer generator
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

/// Seeded PCG32 stream (same seed, same sequence)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted
///
/// Values are reduced modulo `bound`, so a script can be written once and
/// reused regardless of the bound a call site asks for.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

/// Monotonic millisecond counter (animation only, never game logic)
pub trait Clock {
    fn milliseconds(&self) -> u64;
}

/// Milliseconds elapsed since construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn milliseconds(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Caller-controlled clock (headless runs and tests)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl FixedClock {
    pub fn advance(&mut self, ms: u64) {
        self.0 += ms;
    }
}

impl Clock for FixedClock {
    fn milliseconds(&self) -> u64 {
        self.0
    }
}
