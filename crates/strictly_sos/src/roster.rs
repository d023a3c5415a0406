//! Player roster and turn order.

use super::phases::Outcome;
use super::types::{PALETTE, PlayerColor, PlayerCount};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Index of a seat in turn order.
pub type PlayerId = usize;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Stable seat index.
    id: PlayerId,
    /// Display name ("P1", "P2", ...).
    name: String,
    /// Color used for this player's lines.
    color: PlayerColor,
    /// Lines scored so far.
    score: u32,
}

impl Player {
    fn seated(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("P{}", id + 1),
            color: PALETTE[id % PALETTE.len()],
            score: 0,
        }
    }
}

/// Ordered players plus the current-turn pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    current: PlayerId,
}

impl Roster {
    /// Seats `count` players in order, each with a distinct color and zero score.
    #[instrument]
    pub fn new(count: PlayerCount) -> Self {
        Self {
            players: (0..count.get()).map(Player::seated).collect(),
            current: 0,
        }
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is.
    pub fn current_index(&self) -> PlayerId {
        self.current
    }

    /// The player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Passes the turn to the next seat, wrapping around.
    #[instrument(skip(self), fields(from = self.current))]
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(to = self.current, "Turn advanced");
    }

    /// Adds exactly one point to `player`.
    #[instrument(skip(self))]
    pub fn award(&mut self, player: PlayerId) {
        if let Some(p) = self.players.get_mut(player) {
            p.score += 1;
            debug!(score = p.score, "Point awarded");
        }
    }

    /// Sum of every player's score.
    pub fn total_score(&self) -> u32 {
        self.players.iter().map(|p| p.score).sum()
    }

    /// Players ranked by score, highest first. Ties keep seat order.
    pub fn standings(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Final result of the match.
    ///
    /// Only the top two ranks are compared: equal scores there make a draw,
    /// otherwise the top-ranked player wins.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        match self.standings().as_slice() {
            [first, second, ..] if first.score == second.score => Outcome::Draw,
            [first, ..] => Outcome::Winner(first.id),
            [] => Outcome::Draw,
        }
    }
}
