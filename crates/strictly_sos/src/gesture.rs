//! Incremental drag recognizer.
//!
//! Turns a stream of cell-enter events into a straight three-cell line
//! as the finger moves, without waiting for the gesture to end. The first
//! cell is fixed; the second is a tentative direction that can be retracted
//! or pivoted; the third must continue the line exactly.

use super::types::Coord;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Most cells a drag path can hold.
pub const MAX_PATH: usize = 3;

/// Three straight, consecutive cells in drag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    cells: [Coord; 3],
}

impl Line {
    /// Builds a line if the cells are consecutive along one direction.
    pub fn new(cells: [Coord; 3]) -> Option<Self> {
        let line = Self { cells };
        line.is_straight().then_some(line)
    }

    /// Cells in the order they were dragged.
    pub fn cells(&self) -> [Coord; 3] {
        self.cells
    }

    /// Cells sorted by row, then column.
    pub fn canonical(&self) -> [Coord; 3] {
        let mut sorted = self.cells;
        sorted.sort();
        sorted
    }

    fn is_straight(&self) -> bool {
        let [start, mid, end] = self.cells;
        start != mid && start.is_adjacent(mid) && mid.offset(start.delta_to(mid)) == Some(end)
    }
}

/// What a single cell-enter did to the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStep {
    /// First cell of a new path.
    Started(Coord),
    /// Second cell appended as the tentative direction.
    Extended(Coord),
    /// Last cell removed because the finger moved back.
    Backtracked,
    /// Second cell replaced by a new neighbour of the start.
    Pivoted(Coord),
    /// Third cell continued the line exactly.
    Completed(Line),
    /// Redundant or ill-shaped step; path unchanged.
    Ignored,
}

/// The in-progress drag path, holding zero to three cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPath {
    cells: Vec<Coord>,
}

impl DragPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one cell-enter event.
    #[instrument(skip(self), fields(len = self.cells.len()))]
    pub fn enter(&mut self, at: Coord) -> DragStep {
        let Some(&last) = self.cells.last() else {
            self.cells.push(at);
            return DragStep::Started(at);
        };

        if last == at {
            return DragStep::Ignored;
        }

        let len = self.cells.len();
        if len >= 2 && self.cells[len - 2] == at {
            self.cells.pop();
            debug!("Backtracked");
            return DragStep::Backtracked;
        }

        match len {
            1 => {
                if self.cells[0].is_adjacent(at) {
                    self.cells.push(at);
                    DragStep::Extended(at)
                } else {
                    DragStep::Ignored
                }
            }
            2 => {
                let (start, mid) = (self.cells[0], self.cells[1]);
                if mid.offset(start.delta_to(mid)) == Some(at) {
                    self.cells.push(at);
                    debug!(%start, %mid, end = %at, "Line completed");
                    DragStep::Completed(Line {
                        cells: [start, mid, at],
                    })
                } else if start.is_adjacent(at) {
                    self.cells[1] = at;
                    debug!(%mid, pivot = %at, "Pivoted");
                    DragStep::Pivoted(at)
                } else {
                    DragStep::Ignored
                }
            }
            // Locked until cleared.
            _ => DragStep::Ignored,
        }
    }

    /// Ends the gesture, discarding whatever was collected.
    ///
    /// Returns true if a partial path was thrown away.
    #[instrument(skip(self))]
    pub fn release(&mut self) -> bool {
        let discarded = !self.cells.is_empty();
        self.cells.clear();
        discarded
    }

    /// Drops the path.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Cells collected so far.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells collected.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no drag is in progress.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
