//! Error types for episode operations.
//!
//! Only contract and consistency violations are errors. Busts, wins,
//! losses and draws are regular results carried by the reward.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Action value outside the action space (caller bug).
    #[error("Invalid action {0}: expected 0 (stick) or 1 (hit)")]
    InvalidAction(i64),
    #[error("No episode in progress: call reset() first")]
    EpisodeNotStarted,
    #[error("Episode already finished: call reset() to start a new one")]
    EpisodeFinished,
    /// The dealer could never stand, or would stand on a bust sum.
    #[error("Invalid dealer stick threshold {0}: expected a value in [1, 22]")]
    InvalidDealerThreshold(i32),
    /// Dealer resolution reached with a bust player (engine bug).
    #[error("Player already went bust with sum {player_sum}")]
    PlayerAlreadyBust { player_sum: i32 },
}
