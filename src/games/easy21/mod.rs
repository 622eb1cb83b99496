//! Easy21: a stochastic blackjack variant for control experiments.
//!
//! - Infinite deck: values 1-10, black (+value, ~2/3) or red (-value, ~1/3)
//! - Both hands open with one black card worth 2-10
//! - The player hits or sticks; leaving `[1, 21]` is a bust and loses
//! - On stick the dealer hits below 17, then the higher sum wins
//!
//! Rewards are `+1` (win), `0` (draw, or any non-terminal step), `-1` (loss).

mod game;

pub use game::{Easy21, Easy21Builder, Snapshot, DEALER_BUCKETS, PLAYER_BUCKETS};
