//! First-class input events and their effects.
//!
//! Every input from the presentation layer is one `Event`, dispatched
//! through a single transition function. The event type documents which
//! inputs exist; the phase decides which of them do anything.

use super::gesture::DragStep;
use super::ledger::{LineId, ScoredLine};
use super::phases::{Outcome, Phase};
use super::types::{Coord, GridSize, Letter, PlayerCount};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// An input from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Choose the grid size (setup only).
    SelectGridSize(GridSize),
    /// Choose how many players are seated (setup only).
    SelectPlayerCount(PlayerCount),
    /// Leave setup and begin the match.
    StartMatch,
    /// A tap on a cell: toggles the letter selector.
    PlacementTap(Coord),
    /// A letter picked for the pending cell.
    LetterChosen(Letter),
    /// The drag entered a cell.
    DragEnter(Coord),
    /// The finger lifted.
    DragRelease,
    /// The current player ends the turn.
    EndTurn,
    /// Abandon the match and return to setup.
    ResetMatch,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::SelectGridSize(size) => write!(f, "grid size {}", size),
            Event::SelectPlayerCount(count) => write!(f, "{} players", count),
            Event::StartMatch => write!(f, "start"),
            Event::PlacementTap(at) => write!(f, "tap {}", at),
            Event::LetterChosen(letter) => write!(f, "letter {}", letter),
            Event::DragEnter(at) => write!(f, "enter {}", at),
            Event::DragRelease => write!(f, "release"),
            Event::EndTurn => write!(f, "end turn"),
            Event::ResetMatch => write!(f, "reset"),
        }
    }
}

/// What an accepted event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The event does nothing in the current state.
    Ignored,
    /// A setup choice was recorded.
    Configured,
    /// A fresh grid and roster were created.
    Started,
    /// The pending selector moved to a cell or was cleared.
    SelectorMoved(Option<Coord>),
    /// A letter was written.
    Placed {
        /// Where it was written.
        at: Coord,
        /// What was written.
        letter: Letter,
        /// True if this placement used the bonus.
        bonus: bool,
    },
    /// The drag path changed shape without completing.
    PathChanged(DragStep),
    /// An incomplete drag was thrown away on release.
    PathDiscarded,
    /// A completed line scored.
    Scored(ScoredLine),
    /// A completed line did not score.
    NoScore {
        /// Set when the line was already scored.
        duplicate: Option<LineId>,
    },
    /// The turn passed to the next player.
    TurnEnded {
        /// Seat now to move.
        next: usize,
    },
    /// The grid is full; the match is over.
    MatchOver {
        /// Final result.
        outcome: Outcome,
        /// Line scored by the slash that ended the match, if any.
        scored: Option<ScoredLine>,
    },
    /// Back in setup.
    Reset,
}

/// Error returned when an event is refused.
///
/// `MustPlaceFirst` is a rule the player can break and is meant to be shown
/// to them. The remaining variants mean the caller is not honoring the
/// engine's contract.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The turn cannot end before a letter has been written.
    #[display("Place a letter first!")]
    MustPlaceFirst,

    /// A coordinate lies off the grid.
    #[display("Cell {} is outside the {}x{} grid", coord, side, side)]
    OutOfBounds {
        /// Offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        side: usize,
    },

    /// The match is over; only a reset is accepted.
    #[display("Match is over")]
    MatchOver,

    /// Setup choices and start are only accepted during setup.
    #[display("Setup is not possible during {}", _0)]
    NotInSetup(#[error(not(source))] Phase),

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl GameError {
    /// True for rule violations the player should be told about.
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, GameError::MustPlaceFirst)
    }
}
