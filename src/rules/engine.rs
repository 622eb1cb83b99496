//! Environment trait for turn-by-turn play.
//!
//! An external actor drives an environment:
//! - `reset` deals a fresh episode
//! - `step` applies one action and reports what happened
//! - spaces describe valid actions and observations

use serde::{Deserialize, Serialize};

use crate::core::GameError;

use super::spaces::{Discrete, MultiDiscrete};

/// Result of a single `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<O> {
    pub observation: O,
    /// `0` on every non-terminal step.
    pub reward: i32,
    pub done: bool,
}

impl<O> Step<O> {
    /// Split into the `(observation, reward, done)` triple.
    pub fn into_tuple(self) -> (O, i32, bool) {
        (self.observation, self.reward, self.done)
    }
}

/// Environment trait.
///
/// ## Implementation Notes
///
/// - `reset`: always succeeds and starts a new episode
/// - `step`: errors only on contract or consistency violations; game
///   outcomes are carried by `Step::reward` and `Step::done`
/// - `seed`: returns the seed actually used, generated when `None`
pub trait Environment {
    type Action;
    type Observation;

    /// Start a new episode.
    fn reset(&mut self) -> Self::Observation;

    /// Apply one action to the current episode.
    fn step(&mut self, action: Self::Action) -> Result<Step<Self::Observation>, GameError>;

    /// Reinitialize the randomness source.
    fn seed(&mut self, seed: Option<u64>) -> u64;

    fn action_space(&self) -> &Discrete;

    fn observation_space(&self) -> &MultiDiscrete;

    /// Smallest and largest possible reward.
    fn reward_range(&self) -> (i32, i32);

    /// Textual view of the current state.
    fn render(&self) -> String;
}
