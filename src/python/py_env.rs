//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{ColorOdds, Easy21Config, EpisodeStatus, GameError};
use crate::games::easy21::Easy21;
use crate::rules::Environment;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidAction(_) | GameError::InvalidDealerThreshold(_) => {
                PyValueError::new_err(err.to_string())
            }
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Python wrapper for the Easy21 environment.
///
/// Mirrors the gym interface: `reset`, `step`, `seed`, `render`.
#[pyclass(name = "Easy21")]
pub struct PyEasy21 {
    env: Easy21,
}

#[pymethods]
impl PyEasy21 {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: RNG seed; drawn from entropy when omitted
    /// - exact_odds: use exact 1/3 red probability instead of 0.3333
    /// - dealer_stick_threshold: dealer hits below this sum
    #[new]
    #[pyo3(signature = (seed = None, exact_odds = false, dealer_stick_threshold = 17))]
    fn new(seed: Option<u64>, exact_odds: bool, dealer_stick_threshold: i32) -> PyResult<Self> {
        let odds = if exact_odds {
            ColorOdds::Exact
        } else {
            ColorOdds::Reference
        };
        let config = Easy21Config {
            seed,
            color_odds: odds,
            dealer_stick_threshold,
        };
        Ok(Self {
            env: Easy21::new(config)?,
        })
    }

    /// Deal a new episode. Returns `(player_sum, dealer_sum)`.
    fn reset(&mut self) -> (i32, i32) {
        self.env.reset().into()
    }

    /// Apply an action (0 = stick, 1 = hit).
    ///
    /// Returns `((player_sum, dealer_sum), reward, done)`.
    fn step(&mut self, action: i64) -> PyResult<((i32, i32), i32, bool)> {
        let step = self.env.step_raw(action)?;
        Ok((step.observation.into(), step.reward, step.done))
    }

    /// Reseed the environment. Returns the seed actually used.
    #[pyo3(signature = (seed = None))]
    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        vec![self.env.seed(seed)]
    }

    fn render(&self) -> String {
        self.env.render()
    }

    /// Current `[player_sum, dealer_sum]` as a numpy array.
    fn observation_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<i64>>> {
        let obs = self
            .env
            .observation()
            .ok_or(GameError::EpisodeNotStarted)?;
        let values = [i64::from(obs.player_sum), i64::from(obs.dealer_sum)];
        Ok(PyArray1::from_slice_bound(py, &values))
    }

    /// Episode status: "not_started", "in_progress" or "terminal".
    #[getter]
    fn status(&self) -> &'static str {
        match self.env.status() {
            EpisodeStatus::NotStarted => "not_started",
            EpisodeStatus::InProgress => "in_progress",
            EpisodeStatus::Terminal => "terminal",
        }
    }

    /// Number of discrete actions.
    #[getter]
    fn action_space_n(&self) -> usize {
        self.env.action_space().n
    }

    /// Bucket counts of the observation space.
    #[getter]
    fn observation_space_nvec(&self) -> Vec<usize> {
        self.env.observation_space().nvec.clone()
    }

    #[getter]
    fn reward_range(&self) -> (i32, i32) {
        self.env.reward_range()
    }

    fn __repr__(&self) -> String {
        format!("Easy21(status={}, {})", self.status(), self.env.render())
    }
}
