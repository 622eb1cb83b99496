//! # easy21
//!
//! The Easy21 card game as a reinforcement learning environment.
//!
//! ## Design Principles
//!
//! 1. **Explicit State Machine**: An episode is `NotStarted`, `InProgress` or
//!    `Terminal`, and only `reset`/`step` move it between them.
//!
//! 2. **Outcomes Are Values**: Busts, wins, losses and draws come back as
//!    rewards. Only contract violations are `GameError`s.
//!
//! 3. **Reproducible**: All draws come from a seeded ChaCha8 `GameRng`, so two
//!    engines with the same seed and actions produce the same episode.
//!
//! ## Example
//!
//! ```
//! use easy21::{Action, Easy21Builder, Environment};
//!
//! let mut env = Easy21Builder::new().seed(42).build().unwrap();
//! let obs = env.reset();
//! assert!((2..=10).contains(&obs.player_sum));
//!
//! let step = env.step(Action::Stick).unwrap();
//! assert!(step.done);
//! ```
//!
//! ## Modules
//!
//! - `core`: Actions, cards, episode state, RNG, configuration, errors
//! - `rules`: Scoring, dealer policy, spaces, the `Environment` trait
//! - `games`: The Easy21 engine

pub mod core;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    is_bust, Action, Card, Color, ColorOdds, Easy21Config, EpisodeState, EpisodeStatus, GameError,
    GameRng, GameRngState, Observation,
};

pub use crate::rules::{Discrete, Environment, MultiDiscrete, Outcome, Step};

pub use crate::games::easy21::{Easy21, Easy21Builder, Snapshot};
