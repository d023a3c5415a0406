//! Serializable read-only view of the engine.
//!
//! The presentation layer reads one of these after every event and never
//! touches the engine's state directly.

use super::game::SosGame;
use super::ledger::ScoredLine;
use super::phases::{Outcome, Phase};
use super::roster::{Player, PlayerId};
use super::types::{Cell, Coord, GridSize};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Grid size selected or in play.
    pub grid_size: GridSize,
    /// Grid rows, top to bottom. Empty during setup.
    pub grid: Vec<Vec<Cell>>,
    /// Players in turn order. Empty during setup.
    pub players: Vec<Player>,
    /// Seat whose turn it is, once a match is running.
    pub current_player: Option<PlayerId>,
    /// Cell awaiting a letter choice.
    pub pending: Option<Coord>,
    /// In-progress drag.
    pub drag_path: Vec<Coord>,
    /// Scored lines in scoring order.
    pub scored_lines: Vec<ScoredLine>,
    /// True while an earned bonus placement is unused.
    pub bonus_available: bool,
    /// True once the current player has written a letter this turn.
    pub has_placed: bool,
    /// Final result, once the match is over.
    pub outcome: Option<Outcome>,
}

impl From<&SosGame> for Snapshot {
    fn from(game: &SosGame) -> Self {
        Self {
            phase: game.phase(),
            grid_size: game
                .grid()
                .map_or(*game.config().grid_size(), |grid| grid.size()),
            grid: game
                .grid()
                .map(|grid| grid.rows().map(<[Cell]>::to_vec).collect())
                .unwrap_or_default(),
            players: game
                .roster()
                .map(|roster| roster.players().to_vec())
                .unwrap_or_default(),
            current_player: game.roster().map(|roster| roster.current_index()),
            pending: game.pending(),
            drag_path: game.drag_path().cells().to_vec(),
            scored_lines: game
                .ledger()
                .map(|ledger| ledger.lines().to_vec())
                .unwrap_or_default(),
            bonus_available: game.bonus_available(),
            has_placed: game.has_placed(),
            outcome: game.outcome(),
        }
    }
}

impl Snapshot {
    /// Text rendering: status line, grid and scores.
    pub fn display(&self) -> String {
        let mut out = format!("[{}]", self.phase);
        if let Some(current) = self.current_player {
            out.push_str(&format!(" turn: P{}", current + 1));
        }
        if self.bonus_available {
            out.push_str(" (bonus placement available)");
        }
        if let Some(outcome) = self.outcome {
            out.push_str(&format!(" result: {}", outcome));
        }
        for row in &self.grid {
            out.push('\n');
            let symbols: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            out.push_str(&symbols.join(" "));
        }
        if !self.players.is_empty() {
            let scores: Vec<String> = self
                .players
                .iter()
                .map(|p| format!("{}={}", p.name(), p.score()))
                .collect();
            out.push('\n');
            out.push_str(&scores.join(" "));
        }
        out
    }
}
