//! Cards drawn from the infinite Easy21 deck.
//!
//! Two distinct draw procedures exist and must stay separate:
//! - `Card::deal_initial`: the opening card of each hand, always black,
//!   value uniform in `[2, 10]`, no color draw consumed.
//! - `Card::draw`: every later card, color first (black with probability
//!   ~2/3), then value uniform in `[1, 10]`.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Lowest value of an opening card.
pub const INITIAL_MIN_VALUE: i32 = 2;
/// Lowest value of an in-game draw.
pub const DRAW_MIN_VALUE: i32 = 1;
/// Highest card value.
pub const MAX_VALUE: i32 = 10;

/// Card color. Black adds its value to a sum, red subtracts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Probability table for card colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorOdds {
    /// Black with probability 0.6667, matching the reference environment draw for draw.
    #[default]
    Reference,
    /// Black with probability exactly 2/3.
    Exact,
}

impl ColorOdds {
    /// Probability that a drawn card is black.
    #[must_use]
    pub fn black_probability(self) -> f64 {
        match self {
            ColorOdds::Reference => 0.6667,
            ColorOdds::Exact => 2.0 / 3.0,
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub value: i32,
    pub color: Color,
}

impl Card {
    /// Deal an opening card: black, value in `[2, 10]`.
    pub fn deal_initial(rng: &mut GameRng) -> Self {
        Self {
            value: rng.gen_range_inclusive(INITIAL_MIN_VALUE, MAX_VALUE),
            color: Color::Black,
        }
    }

    /// Draw an in-game card: color from `odds`, value in `[1, 10]`.
    pub fn draw(rng: &mut GameRng, odds: ColorOdds) -> Self {
        let color = if rng.gen_bool(odds.black_probability()) {
            Color::Black
        } else {
            Color::Red
        };
        let value = rng.gen_range_inclusive(DRAW_MIN_VALUE, MAX_VALUE);
        Self { value, color }
    }

    /// Signed contribution of this card to a hand sum.
    #[must_use]
    pub fn delta(self) -> i32 {
        match self.color {
            Color::Black => self.value,
            Color::Red => -self.value,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Color::Black => write!(f, "black {}", self.value),
            Color::Red => write!(f, "red {}", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sign_follows_color() {
        let black = Card { value: 7, color: Color::Black };
        let red = Card { value: 7, color: Color::Red };

        assert_eq!(black.delta(), 7);
        assert_eq!(red.delta(), -7);
    }

    #[test]
    fn test_initial_deal_is_black_two_to_ten() {
        let mut rng = GameRng::new(3);
        let cards: Vec<_> = (0..2000).map(|_| Card::deal_initial(&mut rng)).collect();

        assert!(cards.iter().all(|c| c.color == Color::Black));
        assert!(cards.iter().all(|c| (2..=10).contains(&c.value)));
        assert!(cards.iter().any(|c| c.value == 2));
        assert!(cards.iter().any(|c| c.value == 10));
    }

    #[test]
    fn test_draw_covers_one_to_ten() {
        let mut rng = GameRng::new(5);
        let cards: Vec<_> = (0..2000)
            .map(|_| Card::draw(&mut rng, ColorOdds::Reference))
            .collect();

        assert!(cards.iter().all(|c| (1..=10).contains(&c.value)));
        assert!(cards.iter().any(|c| c.value == 1));
        assert!(cards.iter().any(|c| c.value == 10));
    }

    #[test]
    fn test_draw_color_frequency() {
        let mut rng = GameRng::new(11);
        let n = 30_000;
        let red = (0..n)
            .map(|_| Card::draw(&mut rng, ColorOdds::Exact))
            .filter(|c| c.color == Color::Red)
            .count();

        let freq = red as f64 / n as f64;
        assert!((freq - 1.0 / 3.0).abs() < 0.02, "red frequency was {freq}");
    }

    #[test]
    fn test_color_odds() {
        assert_eq!(ColorOdds::default(), ColorOdds::Reference);
        assert_eq!(ColorOdds::Reference.black_probability(), 0.6667);
        assert!((ColorOdds::Exact.black_probability() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card { value: 3, color: Color::Red }.to_string(), "red 3");
        assert_eq!(Card { value: 9, color: Color::Black }.to_string(), "black 9");
    }
}
