//! Environment configuration.
//!
//! Defaults reproduce the reference game: seed drawn from entropy,
//! reference color odds, dealer sticks on 17.

use serde::{Deserialize, Serialize};

use super::card::ColorOdds;
use super::error::GameError;
use super::state::{MAX_SUM, MIN_SUM};

/// Easy21 configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Easy21Config {
    /// Random seed for card draws.
    /// `None` generates one from entropy at construction.
    pub seed: Option<u64>,

    /// Color probability table for in-game draws.
    pub color_odds: ColorOdds,

    /// The dealer keeps hitting while its sum is in `[1, threshold)`.
    pub dealer_stick_threshold: i32,
}

impl Default for Easy21Config {
    fn default() -> Self {
        Self {
            seed: None,
            color_odds: ColorOdds::Reference,
            dealer_stick_threshold: 17,
        }
    }
}

impl Easy21Config {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with custom color odds.
    pub fn with_color_odds(mut self, odds: ColorOdds) -> Self {
        self.color_odds = odds;
        self
    }

    /// Create a new config with a custom dealer threshold.
    pub fn with_dealer_stick_threshold(mut self, threshold: i32) -> Self {
        self.dealer_stick_threshold = threshold;
        self
    }

    /// Check the config before an engine is built from it.
    ///
    /// The threshold must lie in `[1, 22]`: below 1 the dealer stands on a
    /// bust hand, above 22 it could never stand.
    pub fn validate(&self) -> Result<(), GameError> {
        let threshold = self.dealer_stick_threshold;
        if (MIN_SUM..=MAX_SUM + 1).contains(&threshold) {
            Ok(())
        } else {
            Err(GameError::InvalidDealerThreshold(threshold))
        }
    }

    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }
}
