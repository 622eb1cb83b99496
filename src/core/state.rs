//! Episode state.
//!
//! ## Observation
//!
//! The pair of running sums `(player_sum, dealer_sum)`. Sums are signed and
//! unclamped: a bust hand keeps its out-of-range value.
//!
//! ## EpisodeState
//!
//! The state machine of one episode:
//!
//! ```text
//! NotStarted --reset--> InProgress --hit (no bust)--> InProgress
//!                       InProgress --hit (bust) / stick--> Terminal
//!                       Terminal   --reset--> InProgress
//! ```
//!
//! Sums only exist once dealt, so they live inside the variants.

use serde::{Deserialize, Serialize};

/// Lowest non-bust sum.
pub const MIN_SUM: i32 = 1;
/// Highest non-bust sum.
pub const MAX_SUM: i32 = 21;

/// A hand is bust when its sum leaves `[1, 21]`.
///
/// ```
/// use easy21::core::is_bust;
///
/// assert!(!is_bust(1));
/// assert!(!is_bust(21));
/// assert!(is_bust(0));
/// assert!(is_bust(22));
/// ```
#[must_use]
pub fn is_bust(sum: i32) -> bool {
    !(MIN_SUM..=MAX_SUM).contains(&sum)
}

/// What the agent sees after each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub player_sum: i32,
    pub dealer_sum: i32,
}

impl Observation {
    #[must_use]
    pub const fn new(player_sum: i32, dealer_sum: i32) -> Self {
        Self {
            player_sum,
            dealer_sum,
        }
    }
}

impl From<Observation> for (i32, i32) {
    fn from(obs: Observation) -> Self {
        (obs.player_sum, obs.dealer_sum)
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} vs {} Dealer", self.player_sum, self.dealer_sum)
    }
}

/// Lifecycle phase of an episode, without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeStatus {
    NotStarted,
    InProgress,
    Terminal,
}

/// Full episode state owned by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeState {
    #[default]
    NotStarted,
    InProgress(Observation),
    Terminal { observation: Observation, reward: i32 },
}

impl EpisodeState {
    #[must_use]
    pub fn status(&self) -> EpisodeStatus {
        match self {
            EpisodeState::NotStarted => EpisodeStatus::NotStarted,
            EpisodeState::InProgress(_) => EpisodeStatus::InProgress,
            EpisodeState::Terminal { .. } => EpisodeStatus::Terminal,
        }
    }

    /// Current sums, if dealt.
    #[must_use]
    pub fn observation(&self) -> Option<Observation> {
        match *self {
            EpisodeState::NotStarted => None,
            EpisodeState::InProgress(obs) => Some(obs),
            EpisodeState::Terminal { observation, .. } => Some(observation),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, EpisodeState::Terminal { .. })
    }
}
