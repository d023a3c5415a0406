//! The match is over only on a full grid, and a grid exists outside setup.

use super::super::game::SosGame;
use super::super::phases::Phase;
use super::Invariant;

/// Invariant: a grid exists exactly when the phase is not `Setup`, and
/// `GameOver` is only reached once that grid is full.
pub struct TerminalGridFullInvariant;

impl Invariant<SosGame> for TerminalGridFullInvariant {
    fn holds(game: &SosGame) -> bool {
        match (game.phase(), game.grid()) {
            (Phase::Setup, None) => true,
            (Phase::Setup, Some(_)) | (_, None) => false,
            (Phase::GameOver, Some(grid)) => grid.is_full(),
            (_, Some(grid)) => grid.filled_count() + grid.empty_count() == grid.size().cell_count(),
        }
    }

    fn description() -> &'static str {
        "Game over is reached only on a full grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_without_grid_holds() {
        assert!(TerminalGridFullInvariant::holds(&SosGame::new()));
    }

    #[test]
    fn test_game_over_on_empty_grid_violates() {
        let mut game = SosGame::new();
        game.start().unwrap();
        game.phase = Phase::GameOver;
        assert!(!TerminalGridFullInvariant::holds(&game));
    }
}
