//! Grid store: the N×N letter matrix.

use super::types::{Cell, Coord, GridSize, Letter};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square SOS grid. Cells are write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: GridSize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[instrument]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// Returns the grid size.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// True if `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.side() && coord.col < self.side()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.side() + coord.col)
    }

    /// Gets the cell at `coord`, or `None` off the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// True if `coord` is on the grid and holds no letter.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Writes `letter` into an empty cell.
    ///
    /// Filled cells are never rewritten; the first letter is kept.
    #[instrument(skip(self))]
    pub fn place_letter(&mut self, coord: Coord, letter: Letter) -> Result<(), PlaceError> {
        let idx = self.index(coord).ok_or(PlaceError::OutOfBounds(coord))?;
        if !self.cells[idx].is_empty() {
            return Err(PlaceError::Occupied(coord));
        }
        self.cells[idx] = Cell::Filled(letter);
        Ok(())
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding a letter.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Formats the grid as a block of text, one row per line.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Rejected write to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Coordinate lies off the grid.
    #[display("Cell {} is off the grid", _0)]
    OutOfBounds(#[error(not(source))] Coord),
    /// Cell already holds a letter.
    #[display("Cell {} already holds a letter", _0)]
    Occupied(#[error(not(source))] Coord),
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_grid_is_empty() {
        for size in GridSize::iter() {
            let grid = Grid::new(size);
            assert_eq!(grid.empty_count(), size.cell_count());
            assert_eq!(grid.rows().count(), size.side());
            assert!(!grid.is_full());
        }
    }

    #[test]
    fn test_second_write_keeps_first_letter() {
        let mut grid = Grid::new(GridSize::Seven);
        let at = Coord::new(2, 3);
        assert!(grid.place_letter(at, Letter::S).is_ok());
        assert_eq!(grid.place_letter(at, Letter::O), Err(PlaceError::Occupied(at)));
        assert_eq!(grid.get(at), Some(Cell::Filled(Letter::S)));
    }

    #[test]
    fn test_out_of_bounds_write_rejected() {
        let mut grid = Grid::new(GridSize::Seven);
        let at = Coord::new(7, 0);
        assert_eq!(grid.place_letter(at, Letter::S), Err(PlaceError::OutOfBounds(at)));
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_full_after_every_cell_written() {
        let mut grid = Grid::new(GridSize::Seven);
        for row in 0..7 {
            for col in 0..7 {
                assert!(!grid.is_full());
                grid.place_letter(Coord::new(row, col), Letter::O).unwrap();
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.filled_count() + grid.empty_count(), 49);
    }

    #[test]
    fn test_display_rows() {
        let mut grid = Grid::new(GridSize::Seven);
        grid.place_letter(Coord::new(0, 0), Letter::S).unwrap();
        grid.place_letter(Coord::new(0, 1), Letter::O).unwrap();
        let text = grid.display();
        assert_eq!(text.lines().count(), 7);
        assert_eq!(text.lines().next(), Some("S O . . . . ."));
    }
}
