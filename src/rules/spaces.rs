//! Action and observation spaces.
//!
//! Spaces describe the shape of what an agent sends and receives so that
//! tabular or neural agents can size their tables without knowing the game.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Integers in `[0, n)`, with `n >= 1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub const fn new(n: usize) -> Self {
        assert!(n > 0, "Discrete space must hold at least one value");
        Self { n }
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        usize::try_from(value).map_or(false, |v| v < self.n)
    }

    /// Uniform sample.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero, which only a hand-built struct literal allows.
    pub fn sample(&self, rng: &mut GameRng) -> i64 {
        rng.gen_range_usize(0..self.n) as i64
    }
}

/// A vector of independent discrete components, component `i` in `[0, nvec[i])`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDiscrete {
    pub nvec: Vec<usize>,
}

impl MultiDiscrete {
    #[must_use]
    pub fn new(nvec: Vec<usize>) -> Self {
        Self { nvec }
    }

    #[must_use]
    pub fn contains(&self, values: &[i64]) -> bool {
        values.len() == self.nvec.len()
            && values
                .iter()
                .zip(&self.nvec)
                .all(|(&v, &n)| Discrete::new(n).contains(v))
    }

    pub fn sample(&self, rng: &mut GameRng) -> Vec<i64> {
        self.nvec
            .iter()
            .map(|&n| Discrete::new(n).sample(rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discrete_contains() {
        let space = Discrete::new(2);

        assert!(space.contains(0));
        assert!(space.contains(1));
        assert!(!space.contains(2));
        assert!(!space.contains(-1));
    }

    #[test]
    fn test_discrete_sample_in_space() {
        let space = Discrete::new(2);
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            assert!(space.contains(space.sample(&mut rng)));
        }
    }

    #[test]
    #[should_panic(expected = "Discrete space must hold at least one value")]
    fn test_empty_discrete_rejected() {
        let _ = Discrete::new(0);
    }

    #[test]
    fn test_multi_discrete() {
        let space = MultiDiscrete::new(vec![22, 11]);
        let mut rng = GameRng::new(42);

        assert!(space.contains(&[21, 10]));
        assert!(!space.contains(&[22, 0]));
        assert!(!space.contains(&[3]));

        for _ in 0..100 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
    }
}
