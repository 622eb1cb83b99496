//! Core engine types: actions, cards, state, RNG, configuration, errors.
//!
//! These are the building blocks the game rules are written against.

pub mod action;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use action::Action;
pub use card::{Card, Color, ColorOdds};
pub use config::Easy21Config;
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
pub use state::{is_bust, EpisodeState, EpisodeStatus, Observation, MAX_SUM, MIN_SUM};
