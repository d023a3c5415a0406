//! Match phases and final outcome.

use super::roster::PlayerId;
use serde::{Deserialize, Serialize};

/// Current phase of the match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// Choosing grid size and player count.
    #[default]
    Setup,
    /// The current player must write a letter.
    Placement,
    /// The current player may slash lines or end the turn.
    Claiming,
    /// No empty cell remains. Only a reset is accepted.
    GameOver,
}

impl Phase {
    /// True once the match has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A single player holds the top score.
    Winner(PlayerId),
    /// The two top-ranked players share the top score.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "P{} wins", player + 1),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(Outcome::Winner(2).winner(), Some(2));
        assert!(!Outcome::Winner(2).is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Winner(2).to_string(), "P3 wins");
    }

    #[test]
    fn test_only_game_over_is_terminal() {
        assert!(Phase::GameOver.is_terminal());
        assert!(!Phase::Claiming.is_terminal());
    }
}
