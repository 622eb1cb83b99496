//! Game rules and the environment interface.
//!
//! - `engine`: the `Environment` trait agents play against
//! - `scoring`: hit resolution, dealer policy, terminal scoring
//! - `spaces`: action and observation space descriptions

pub mod engine;
pub mod scoring;
pub mod spaces;

pub use engine::{Environment, Step};
pub use scoring::{dealer_play, hit_result, settle, Outcome};
pub use spaces::{Discrete, MultiDiscrete};
