//! Slash validation: does a dragged line spell a fresh S-O-S?

use super::super::gesture::Line;
use super::super::grid::Grid;
use super::super::ledger::{LineId, LineLedger};
use super::super::types::{Cell, Coord, Letter};
use tracing::{debug, instrument};

/// Result of checking a completed drag against the grid and ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashVerdict {
    /// The line reads S-O-S and has not been scored yet.
    Sos {
        /// Canonical identity to register.
        id: LineId,
        /// First cell in row-then-column order.
        start: Coord,
        /// Last cell in row-then-column order.
        end: Coord,
    },
    /// The cells do not read S, O, S.
    NotSos,
    /// The line was scored earlier in the match.
    AlreadyScored(LineId),
}

impl SlashVerdict {
    /// True if the slash earns a point.
    pub fn scores(&self) -> bool {
        matches!(self, SlashVerdict::Sos { .. })
    }
}

/// Checks a completed line.
///
/// Cells are read in row-then-column order, so a line dragged in either
/// direction gives the same verdict and the same id.
#[instrument(skip(grid, ledger))]
pub fn validate_slash(grid: &Grid, ledger: &LineLedger, line: &Line) -> SlashVerdict {
    let [first, middle, last] = line.canonical();
    let reads = |at: Coord, letter: Letter| grid.get(at).and_then(Cell::letter) == Some(letter);

    if !(reads(first, Letter::S) && reads(middle, Letter::O) && reads(last, Letter::S)) {
        debug!(%first, %last, "Not an SOS");
        return SlashVerdict::NotSos;
    }

    let id = LineId::new(first, last);
    if ledger.contains(&id) {
        return SlashVerdict::AlreadyScored(id);
    }

    SlashVerdict::Sos {
        id,
        start: first,
        end: last,
    }
}
