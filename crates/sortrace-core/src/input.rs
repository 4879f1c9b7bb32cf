#![forbid(unsafe_code)]

//! Deterministic input arrays for visualization sessions, tests and benches.
//!
//! The same [`InputSpec`] (including its seed) always yields the same array,
//! so a visualization can be reproduced exactly.

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shape of a generated input array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputPreset {
    /// Uniform random values in `[min, max]`.
    #[default]
    Random,
    /// Ascending.
    Sorted,
    /// Descending.
    Reversed,
    /// Ascending with roughly one adjacent pair in ten swapped.
    NearlySorted,
    /// Values drawn from at most five distinct keys.
    FewUnique,
}

impl InputPreset {
    pub const ALL: [InputPreset; 5] = [
        InputPreset::Random,
        InputPreset::Sorted,
        InputPreset::Reversed,
        InputPreset::NearlySorted,
        InputPreset::FewUnique,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::NearlySorted => "nearly-sorted",
            Self::FewUnique => "few-unique",
        }
    }
}

impl fmt::Display for InputPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == key)
            .ok_or_else(|| format!("unknown input preset: {s}"))
    }
}

/// Parameters for [`InputSpec::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputSpec {
    pub preset: InputPreset,
    pub len: usize,
    /// Smallest value (inclusive).
    pub min: i32,
    /// Largest value (inclusive). Swapped with `min` if smaller.
    pub max: i32,
    pub seed: u64,
}

impl Default for InputSpec {
    fn default() -> Self {
        Self {
            preset: InputPreset::Random,
            len: 32,
            min: 1,
            max: 100,
            seed: 0x5EED,
        }
    }
}

impl InputSpec {
    #[must_use]
    pub fn new(preset: InputPreset, len: usize) -> Self {
        Self {
            preset,
            len,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Produce the array described by this spec.
    #[must_use]
    pub fn generate(&self) -> Vec<i32> {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut values: Vec<i32> = (0..self.len).map(|_| rng.random_range(lo..=hi)).collect();

        match self.preset {
            InputPreset::Random => {}
            InputPreset::Sorted => values.sort_unstable(),
            InputPreset::Reversed => values.sort_unstable_by(|a, b| b.cmp(a)),
            InputPreset::NearlySorted => {
                values.sort_unstable();
                let swaps = (self.len / 10).max(usize::from(self.len > 1));
                for _ in 0..swaps {
                    let i = rng.random_range(0..self.len - 1);
                    values.swap(i, i + 1);
                }
            }
            InputPreset::FewUnique => {
                let mut keys: Vec<i32> = (0..5).map(|_| rng.random_range(lo..=hi)).collect();
                keys.dedup();
                values = (0..self.len)
                    .map(|_| keys[rng.random_range(0..keys.len())])
                    .collect();
                values.shuffle(&mut rng);
            }
        }
        values
    }
}
