//! End-of-match detection.

use super::super::grid::Grid;
use super::super::phases::Outcome;
use super::super::roster::Roster;
use tracing::instrument;

/// The match is over once no empty cell remains, whatever the score.
#[instrument(skip(grid))]
pub fn is_over(grid: &Grid) -> bool {
    grid.is_full()
}

/// Outcome if the match is over, `None` while cells remain.
#[instrument(skip(grid, roster))]
pub fn final_outcome(grid: &Grid, roster: &Roster) -> Option<Outcome> {
    is_over(grid).then(|| roster.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, GridSize, Letter, PlayerCount};

    #[test]
    fn test_no_outcome_while_cells_remain() {
        let grid = Grid::new(GridSize::Eight);
        let roster = Roster::new(PlayerCount::default());
        assert_eq!(final_outcome(&grid, &roster), None);
    }

    #[test]
    fn test_full_grid_without_points_is_draw() {
        let mut grid = Grid::new(GridSize::Seven);
        for row in 0..7 {
            for col in 0..7 {
                grid.place_letter(Coord::new(row, col), Letter::O).unwrap();
            }
        }
        let roster = Roster::new(PlayerCount::default());
        assert_eq!(final_outcome(&grid, &roster), Some(Outcome::Draw));
    }
}
