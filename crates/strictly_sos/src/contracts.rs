//! Contract-based validation for SOS transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} action {Q}.

use super::action::GameError;
use super::game::SosGame;
use super::invariants::{InvariantSet, SosInvariants};
use super::phases::Phase;
use super::types::Coord;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Runs the full invariant set, folding violations into one error.
#[instrument(skip(game))]
pub fn check_invariants(game: &SosGame) -> Result<(), GameError> {
    SosInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Invariant check failed");
        GameError::InvariantViolation(descriptions)
    })
}

// ─────────────────────────────────────────────────────────────
//  Placement
// ─────────────────────────────────────────────────────────────

/// Precondition: placement is open (start of turn, or an unused bonus).
pub struct PlacementOpen;

impl PlacementOpen {
    #[instrument(skip(game))]
    pub fn check(game: &SosGame) -> Result<(), GameError> {
        if game.phase() == Phase::GameOver {
            return Err(GameError::MatchOver);
        }
        if game.placement_allowed() {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(format!(
                "Placement is closed during {}",
                game.phase()
            )))
        }
    }
}

/// Precondition: the target cell is on the grid and empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    #[instrument(skip(game))]
    pub fn check(at: &Coord, game: &SosGame) -> Result<(), GameError> {
        let grid = game
            .grid()
            .ok_or(GameError::NotInSetup(Phase::Setup))?;
        if !grid.contains(*at) {
            return Err(GameError::OutOfBounds {
                coord: *at,
                side: grid.side(),
            });
        }
        if grid.is_empty_at(*at) {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(format!(
                "Cell {} already holds a letter",
                at
            )))
        }
    }
}

/// Contract for writing a letter into the pending cell.
///
/// Preconditions:
/// - Placement is open
/// - The cell is on the grid and empty
///
/// Postconditions:
/// - Exactly one more cell holds a letter
/// - All engine invariants hold
pub struct PlacementContract;

impl Contract<SosGame, Coord> for PlacementContract {
    fn pre(game: &SosGame, at: &Coord) -> Result<(), GameError> {
        PlacementOpen::check(game)?;
        CellIsEmpty::check(at, game)
    }

    fn post(before: &SosGame, after: &SosGame) -> Result<(), GameError> {
        let filled = |game: &SosGame| game.grid().map_or(0, |grid| grid.filled_count());
        if filled(after) != filled(before) + 1 {
            return Err(GameError::InvariantViolation(
                "Placement must fill exactly one cell".to_string(),
            ));
        }
        check_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn end
// ─────────────────────────────────────────────────────────────

/// Precondition: the current player has written a letter this turn.
pub struct HasPlacedThisTurn;

impl HasPlacedThisTurn {
    #[instrument(skip(game))]
    pub fn check(game: &SosGame) -> Result<(), GameError> {
        if game.has_placed() {
            Ok(())
        } else {
            warn!("Turn end refused: no letter placed");
            Err(GameError::MustPlaceFirst)
        }
    }
}

/// Contract for ending a turn.
///
/// Preconditions:
/// - The match is not over
/// - A letter was placed this turn
///
/// Postconditions:
/// - The next turn starts clean (no placement, bonus, selector or drag)
/// - All engine invariants hold
pub struct EndTurnContract;

impl Contract<SosGame, ()> for EndTurnContract {
    fn pre(game: &SosGame, _action: &()) -> Result<(), GameError> {
        if game.phase().is_terminal() {
            return Err(GameError::MatchOver);
        }
        HasPlacedThisTurn::check(game)
    }

    fn post(_before: &SosGame, after: &SosGame) -> Result<(), GameError> {
        let clean = !after.has_placed()
            && !after.bonus_available()
            && after.pending().is_none()
            && after.drag_path().is_empty();
        if !clean {
            return Err(GameError::InvariantViolation(
                "Turn end must clear per-turn state".to_string(),
            ));
        }
        check_invariants(after)
    }
}
