//! Injectable randomness
//!
//! Spawn jitter, enemy colors and the reload flicker all draw from one
//! [`RandomSource`]. The game uses a seeded PCG stream; tests and replays can
//! substitute a scripted source.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform integers
pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32;

    /// Fair coin flip
    fn coin(&mut self) -> bool {
        self.range_inclusive(0, 1) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        (**self).range_inclusive(min, max)
    }
}

/// Seeded PCG random stream
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed the stream was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values, clamped into each requested range
///
/// Once the script runs out every draw returns the low end of its range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        match self.values.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }
}
