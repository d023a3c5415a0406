//! Pending selector always points at a cell that can take a letter.

use super::super::game::SosGame;
use super::Invariant;

/// Invariant: a pending selector is only set while placement is allowed,
/// and it always points at an empty cell on the grid.
pub struct PendingSelectorInvariant;

impl Invariant<SosGame> for PendingSelectorInvariant {
    fn holds(game: &SosGame) -> bool {
        let Some(at) = game.pending() else {
            return true;
        };
        game.placement_allowed() && game.grid().is_some_and(|grid| grid.is_empty_at(at))
    }

    fn description() -> &'static str {
        "Pending selector points at an empty cell while placement is allowed"
    }
}
