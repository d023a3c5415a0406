//! Line ledger: which SOS lines have been scored.

use super::types::{Coord, PlayerColor};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Direction-independent identity of a line, built from its sorted endpoints.
///
/// Displays as `"r,c-r,c"`, e.g. `"0,0-0,2"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("{first}-{last}")]
pub struct LineId {
    first: Coord,
    last: Coord,
}

impl LineId {
    /// Builds the canonical id; endpoint order does not matter.
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// Endpoint that sorts first (row, then column).
    pub fn first(&self) -> Coord {
        self.first
    }

    /// Endpoint that sorts last.
    pub fn last(&self) -> Coord {
        self.last
    }
}

/// A scored line, kept for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct ScoredLine {
    /// Canonical identity.
    id: LineId,
    /// First endpoint in canonical order.
    start: Coord,
    /// Last endpoint in canonical order.
    end: Coord,
    /// Color of the scoring player.
    color: PlayerColor,
}

/// Registry of scored lines. Entries are never removed during a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineLedger {
    ids: HashSet<LineId>,
    lines: Vec<ScoredLine>,
}

impl LineLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id`, returning false if it was already present.
    #[instrument(skip(self), fields(line = %id))]
    pub fn try_register(&mut self, id: LineId) -> bool {
        let inserted = self.ids.insert(id);
        if !inserted {
            debug!("Line already scored");
        }
        inserted
    }

    /// Registers the line and stores its record; false for a duplicate.
    #[instrument(skip(self), fields(line = %line.id))]
    pub fn record(&mut self, line: ScoredLine) -> bool {
        if !self.try_register(line.id) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// True if `id` has been scored.
    pub fn contains(&self, id: &LineId) -> bool {
        self.ids.contains(id)
    }

    /// Scored lines in the order they were scored.
    pub fn lines(&self) -> &[ScoredLine] {
        &self.lines
    }

    /// Number of distinct registered ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing has been scored.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
