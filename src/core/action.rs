//! Player actions.
//!
//! The action space is discrete with two values: `0 = Stick`, `1 = Hit`.
//! Raw integers coming from an agent are validated through `TryFrom`,
//! so an out-of-range value is rejected before it reaches the engine.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A player decision.
///
/// ```
/// use easy21::core::Action;
///
/// assert_eq!(Action::try_from(1i64).unwrap(), Action::Hit);
/// assert!(Action::try_from(3i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// End the turn; the dealer plays out its hand.
    Stick = 0,
    /// Draw one more card.
    Hit = 1,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; 2] = [Action::Stick, Action::Hit];

    /// Index of this action in the action space.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<i64> for Action {
    type Error = GameError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Stick),
            1 => Ok(Action::Hit),
            other => Err(GameError::InvalidAction(other)),
        }
    }
}

impl From<Action> for i64 {
    fn from(action: Action) -> Self {
        action as i64
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Stick => write!(f, "stick"),
            Action::Hit => write!(f, "hit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_raw() {
        assert_eq!(Action::try_from(0i64), Ok(Action::Stick));
        assert_eq!(Action::try_from(1i64), Ok(Action::Hit));
    }

    #[test]
    fn test_invalid_action_rejected() {
        assert_eq!(Action::try_from(3i64), Err(GameError::InvalidAction(3)));
        assert_eq!(Action::try_from(-1i64), Err(GameError::InvalidAction(-1)));
    }

    #[test]
    fn test_action_index_matches_raw_value() {
        for action in Action::ALL {
            assert_eq!(action.index() as i64, i64::from(action));
            assert_eq!(Action::try_from(i64::from(action)), Ok(action));
        }
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::Hit).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, Action::Hit);
    }
}
