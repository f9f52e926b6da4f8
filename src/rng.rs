//! Random source used for spawns, score and timer deltas.
//!
//! The engine only ever asks for a uniform value in `[0, 1)` (or an index derived from
//! one), so tests can script exact values.

use crate::tile::TileKind;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait RandomSource: std::fmt::Debug {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize {
        ((self.unit() * n as f64) as usize).min(n.saturating_sub(1))
    }

    /// Permute `kinds` in place.
    fn shuffle_kinds(&mut self, kinds: &mut [TileKind]);
}

/// Default source: `StdRng`, optionally seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct GameRng(StdRng);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl RandomSource for GameRng {
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    fn below(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n.max(1))
    }

    fn shuffle_kinds(&mut self, kinds: &mut [TileKind]) {
        kinds.shuffle(&mut self.0);
    }
}

/// Replays a fixed list of unit values, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    /// Always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(&[value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }

    /// Rotates left by one scripted index, so tests can predict the order.
    fn shuffle_kinds(&mut self, kinds: &mut [TileKind]) {
        if !kinds.is_empty() {
            let by = self.below(kinds.len());
            kinds.rotate_left(by);
        }
    }
}
