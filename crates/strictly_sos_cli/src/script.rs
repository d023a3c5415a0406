//! Scripted event streams.
//!
//! ```toml
//! [match]
//! grid_size = 7
//! player_count = 2
//!
//! [[event]]
//! kind = "place"
//! row = 0
//! col = 0
//! letter = "S"
//!
//! [[event]]
//! kind = "end_turn"
//! ```

use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use strictly_sos::{Coord, Event, Letter, MatchConfig};
use tracing::{debug, info, instrument};

/// A match script: optional setup plus an ordered list of inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Setup choices applied before the first event.
    #[serde(default, rename = "match")]
    pub setup: Option<MatchConfig>,

    /// Inputs in delivery order.
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Begin the match.
    Start,
    /// Tap a cell.
    Tap {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
    },
    /// Pick a letter for the pending cell.
    Letter {
        /// Letter to write.
        letter: Letter,
    },
    /// Tap a cell and pick a letter in one step.
    Place {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
        /// Letter to write.
        letter: Letter,
    },
    /// Drag into a cell.
    Enter {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
    },
    /// Lift the finger.
    Release,
    /// End the turn.
    EndTurn,
    /// Return to setup.
    Reset,
}

impl ScriptEvent {
    /// Engine events this entry stands for, in order.
    pub fn to_events(self) -> Vec<Event> {
        match self {
            ScriptEvent::Start => vec![Event::StartMatch],
            ScriptEvent::Tap { row, col } => vec![Event::PlacementTap(Coord::new(row, col))],
            ScriptEvent::Letter { letter } => vec![Event::LetterChosen(letter)],
            ScriptEvent::Place { row, col, letter } => vec![
                Event::PlacementTap(Coord::new(row, col)),
                Event::LetterChosen(letter),
            ],
            ScriptEvent::Enter { row, col } => vec![Event::DragEnter(Coord::new(row, col))],
            ScriptEvent::Release => vec![Event::DragRelease],
            ScriptEvent::EndTurn => vec![Event::EndTurn],
            ScriptEvent::Reset => vec![Event::ResetMatch],
        }
    }
}

impl Script {
    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(events = script.events.len(), "Script parsed");
        Ok(script)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;
        let script = Self::from_toml_str(&content)?;
        info!(events = script.events.len(), "Script loaded");
        Ok(script)
    }

    /// Engine events for the whole script, in delivery order.
    pub fn engine_events(&self) -> impl Iterator<Item = Event> + '_ {
        self.events.iter().flat_map(|entry| entry.to_events())
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
