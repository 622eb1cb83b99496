//! Easy21 engine implementation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    is_bust, Action, Card, ColorOdds, Easy21Config, EpisodeState, EpisodeStatus, GameError, GameRng, GameRngState,
    Observation,
};
use crate::rules::{dealer_play, hit_result, settle, Discrete, Environment, MultiDiscrete, Step};

/// Number of player-sum buckets in the observation space.
pub const PLAYER_BUCKETS: usize = 22;
/// Number of dealer-sum buckets in the observation space.
pub const DEALER_BUCKETS: usize = 11;

/// Checkpoint of an engine: episode state plus RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: EpisodeState,
    pub rng: GameRngState,
}

/// The Easy21 game engine.
///
/// Owns the episode state exclusively; it changes only through
/// `reset` and `step`.
#[derive(Clone, Debug)]
pub struct Easy21 {
    config: Easy21Config,
    rng: GameRng,
    state: EpisodeState,
    action_space: Discrete,
    observation_space: MultiDiscrete,
}

/// Builder for creating an Easy21 engine.
#[derive(Clone, Debug, Default)]
pub struct Easy21Builder {
    config: Easy21Config,
}

impl Easy21Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn color_odds(mut self, odds: ColorOdds) -> Self {
        self.config.color_odds = odds;
        self
    }

    pub fn dealer_stick_threshold(mut self, threshold: i32) -> Self {
        self.config.dealer_stick_threshold = threshold;
        self
    }

    /// Build the engine. The episode starts `NotStarted`.
    pub fn build(self) -> Result<Easy21, GameError> {
        Easy21::new(self.config)
    }
}

impl Easy21 {
    /// Create an engine, rejecting configs that fail `Easy21Config::validate`.
    pub fn new(config: Easy21Config) -> Result<Self, GameError> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            config,
            rng,
            state: EpisodeState::NotStarted,
            action_space: Discrete::new(Action::ALL.len()),
            observation_space: MultiDiscrete::new(vec![PLAYER_BUCKETS, DEALER_BUCKETS]),
        })
    }

    pub fn config(&self) -> &Easy21Config {
        &self.config
    }

    pub fn state(&self) -> &EpisodeState {
        &self.state
    }

    pub fn status(&self) -> EpisodeStatus {
        self.state.status()
    }

    /// Current sums, or `None` before the first `reset`.
    pub fn observation(&self) -> Option<Observation> {
        self.state.observation()
    }

    /// `step` with an unvalidated action value from an agent.
    pub fn step_raw(&mut self, action: i64) -> Result<Step<Observation>, GameError> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    /// Capture the episode and RNG position.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            rng: self.rng.state(),
        }
    }

    /// Resume from a snapshot. The sums are taken as given; a bust player
    /// sum is rejected when the episode is next resolved.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.state = snapshot.state;
        self.rng = GameRng::from_state(&snapshot.rng);
    }

    fn hit(&mut self, obs: Observation) -> (Observation, i32, bool) {
        let card = Card::draw(&mut self.rng, self.config.color_odds);
        // Saturating: any sum pushed past the i32 range is bust anyway.
        let player_sum = obs.player_sum.saturating_add(card.delta());
        let observation = Observation::new(player_sum, obs.dealer_sum);
        let (reward, done) = hit_result(observation.player_sum);
        debug!(%card, player_sum = observation.player_sum, done, "player hits");
        (observation, reward, done)
    }

    fn stick(&mut self, obs: Observation) -> Result<(Observation, i32, bool), GameError> {
        // A bust player must never make the dealer draw.
        if is_bust(obs.player_sum) {
            return Err(GameError::PlayerAlreadyBust {
                player_sum: obs.player_sum,
            });
        }
        let dealer_sum = dealer_play(
            obs.dealer_sum,
            &mut self.rng,
            self.config.color_odds,
            self.config.dealer_stick_threshold,
        );
        let observation = Observation::new(obs.player_sum, dealer_sum);
        let outcome = settle(observation.player_sum, dealer_sum)?;
        debug!(
            player_sum = observation.player_sum,
            dealer_sum,
            ?outcome,
            "player sticks"
        );
        Ok((observation, outcome.reward(), true))
    }
}

impl Environment for Easy21 {
    type Action = Action;
    type Observation = Observation;

    fn reset(&mut self) -> Observation {
        let player = Card::deal_initial(&mut self.rng);
        let dealer = Card::deal_initial(&mut self.rng);
        let observation = Observation::new(player.delta(), dealer.delta());
        self.state = EpisodeState::InProgress(observation);
        debug!(%observation, "episode reset");
        observation
    }

    fn step(&mut self, action: Action) -> Result<Step<Observation>, GameError> {
        let current = match self.state {
            EpisodeState::InProgress(obs) => obs,
            EpisodeState::NotStarted => return Err(GameError::EpisodeNotStarted),
            EpisodeState::Terminal { .. } => return Err(GameError::EpisodeFinished),
        };

        let (observation, reward, done) = match action {
            Action::Hit => self.hit(current),
            Action::Stick => self.stick(current)?,
        };

        self.state = if done {
            EpisodeState::Terminal { observation, reward }
        } else {
            EpisodeState::InProgress(observation)
        };

        Ok(Step {
            observation,
            reward,
            done,
        })
    }

    fn seed(&mut self, seed: Option<u64>) -> u64 {
        self.rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let effective = self.rng.seed();
        self.config.seed = Some(effective);
        effective
    }

    fn action_space(&self) -> &Discrete {
        &self.action_space
    }

    fn observation_space(&self) -> &MultiDiscrete {
        &self.observation_space
    }

    fn reward_range(&self) -> (i32, i32) {
        (-1, 1)
    }

    fn render(&self) -> String {
        match self.state.observation() {
            Some(obs) => format!("Easy21: {obs}"),
            None => "Easy21: no episode dealt".to_string(),
        }
    }
}

impl std::fmt::Display for Easy21 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
