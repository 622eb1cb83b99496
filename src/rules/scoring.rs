//! Turn resolution and terminal scoring.
//!
//! - `hit_result`: player turn, only the player's sum matters
//! - `dealer_play`: the fixed dealer policy
//! - `settle`: compares sums once the dealer has played

use std::cmp::Ordering;

use tracing::trace;

use crate::core::{is_bust, Card, ColorOdds, GameError, GameRng};

/// Result of a finished episode from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Reward emitted on the terminal step.
    #[must_use]
    pub fn reward(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Lose => -1,
            Outcome::Draw => 0,
        }
    }
}

/// Reward and done flag after the player hits to `player_sum`.
#[must_use]
pub fn hit_result(player_sum: i32) -> (i32, bool) {
    if is_bust(player_sum) {
        (Outcome::Lose.reward(), true)
    } else {
        (0, false)
    }
}

/// Play out the dealer's hand from `dealer_sum`.
///
/// The dealer draws while its sum is not bust and below `threshold`. The
/// condition is checked before each draw, so a sum already at or above the
/// threshold, or already bust, draws nothing, and a busting draw ends the
/// loop whatever the threshold.
pub fn dealer_play(mut dealer_sum: i32, rng: &mut GameRng, odds: ColorOdds, threshold: i32) -> i32 {
    while !is_bust(dealer_sum) && dealer_sum < threshold {
        let card = Card::draw(rng, odds);
        dealer_sum += card.delta();
        trace!(%card, dealer_sum, "dealer draws");
    }
    dealer_sum
}

/// Score the episode after the dealer has played.
///
/// Reaching this with a bust player means the hit branch failed to end the
/// episode, which is reported as `GameError::PlayerAlreadyBust`.
pub fn settle(player_sum: i32, dealer_sum: i32) -> Result<Outcome, GameError> {
    if is_bust(player_sum) {
        return Err(GameError::PlayerAlreadyBust { player_sum });
    }
    if is_bust(dealer_sum) {
        return Ok(Outcome::Win);
    }
    Ok(match player_sum.cmp(&dealer_sum) {
        Ordering::Greater => Outcome::Win,
        Ordering::Less => Outcome::Lose,
        Ordering::Equal => Outcome::Draw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_without_bust() {
        assert_eq!(hit_result(5), (0, false));
        assert_eq!(hit_result(21), (0, false));
        assert_eq!(hit_result(1), (0, false));
    }

    #[test]
    fn test_hit_with_bust() {
        assert_eq!(hit_result(22), (-1, true));
        assert_eq!(hit_result(0), (-1, true));
    }

    #[test]
    fn test_settle_tie() {
        assert_eq!(settle(5, 5), Ok(Outcome::Draw));
        assert_eq!(Outcome::Draw.reward(), 0);
    }

    #[test]
    fn test_settle_bust_player_is_inconsistent() {
        assert_eq!(settle(22, 5), Err(GameError::PlayerAlreadyBust { player_sum: 22 }));
        assert_eq!(settle(0, 19), Err(GameError::PlayerAlreadyBust { player_sum: 0 }));
    }

    #[test]
    fn test_settle_dealer_higher() {
        assert_eq!(settle(14, 19), Ok(Outcome::Lose));
    }

    #[test]
    fn test_settle_player_higher() {
        assert_eq!(settle(20, 17), Ok(Outcome::Win));
    }

    #[test]
    fn test_settle_dealer_bust() {
        assert_eq!(settle(14, 0), Ok(Outcome::Win));
        assert_eq!(settle(14, 25), Ok(Outcome::Win));
    }

    #[test]
    fn test_dealer_at_threshold_draws_nothing() {
        let mut rng = GameRng::new(1);
        let before = rng.state();

        assert_eq!(dealer_play(19, &mut rng, ColorOdds::Reference, 17), 19);
        assert_eq!(dealer_play(17, &mut rng, ColorOdds::Reference, 17), 17);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_bust_dealer_draws_nothing() {
        let mut rng = GameRng::new(1);
        let before = rng.state();

        assert_eq!(dealer_play(0, &mut rng, ColorOdds::Reference, 17), 0);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_dealer_stops_on_bust_above_twenty_one_threshold() {
        for seed in 0..500 {
            let mut rng = GameRng::new(seed);
            let sum = dealer_play(5, &mut rng, ColorOdds::Reference, 40);
            // Only a bust ends the loop; the last draw adds at most 10.
            assert!(is_bust(sum), "seed {seed} ended at {sum}");
            assert!((-9..=31).contains(&sum), "seed {seed} drew past a bust: {sum}");
        }
    }

    #[test]
    fn test_dealer_stops_at_threshold_or_bust() {
        for seed in 0..500 {
            let mut rng = GameRng::new(seed);
            let sum = dealer_play(5, &mut rng, ColorOdds::Reference, 17);
            assert!(is_bust(sum) || (17..=21).contains(&sum), "seed {seed} ended at {sum}");
        }
    }
}
