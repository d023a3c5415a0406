//! Drag path shape: short, connected, and only alive while claiming.

use super::super::game::SosGame;
use super::super::gesture::MAX_PATH;
use super::super::phases::Phase;
use super::Invariant;

/// Invariant: between events the drag path holds fewer than three cells,
/// its second cell is a distinct neighbour of the first, and a path exists
/// only during `Claiming`.
///
/// A completed three-cell path is resolved and cleared within the event
/// that completed it.
pub struct DragPathShapeInvariant;

impl Invariant<SosGame> for DragPathShapeInvariant {
    fn holds(game: &SosGame) -> bool {
        let cells = game.drag_path().cells();
        if cells.is_empty() {
            return true;
        }
        if game.phase() != Phase::Claiming || cells.len() >= MAX_PATH {
            return false;
        }
        match cells {
            [_] => true,
            [start, mid] => start != mid && start.is_adjacent(*mid),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Drag path is short, connected and only exists while claiming"
    }
}
