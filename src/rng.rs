//! Injectable randomness for the turn processor.
//!
//! Every draw a turn needs goes through [`RandomSource`], so runs can be
//! seeded for replay or scripted outright in tests.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    fn uniform_int(&mut self, min: i64, max: i64) -> i64;

    /// Bernoulli trial succeeding with `probability`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform fraction in `[0, upper)`.
    fn fraction(&mut self, upper: f64) -> f64;
}

/// Deterministic source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    inner: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new(42)
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen::<f64>() < probability
    }

    fn fraction(&mut self, upper: f64) -> f64 {
        self.inner.gen::<f64>() * upper
    }
}

/// Replays queued outcomes in order.
///
/// An exhausted queue falls back to the range minimum, `false`, or `0.0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<i64>,
    chances: VecDeque<bool>,
    fractions: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.ints.extend(values);
        self
    }

    pub fn with_chances(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(values);
        self
    }

    pub fn with_fractions(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.fractions.extend(values);
        self
    }

    pub fn push_int(&mut self, value: i64) {
        self.ints.push_back(value);
    }

    pub fn push_chance(&mut self, value: bool) {
        self.chances.push_back(value);
    }

    pub fn push_fraction(&mut self, value: f64) {
        self.fractions.push_back(value);
    }

    pub fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.chances.is_empty() && self.fractions.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        match self.ints.pop_front() {
            Some(value) => value.clamp(min, max.max(min)),
            None => min,
        }
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn fraction(&mut self, upper: f64) -> f64 {
        match self.fractions.pop_front() {
            Some(value) if value < upper => value.max(0.0),
            Some(_) => upper * (1.0 - f64::EPSILON),
            None => 0.0,
        }
    }
}
