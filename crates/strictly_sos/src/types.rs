//! Core domain types for SOS.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// A letter a player can write into an empty cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, EnumIter,
)]
pub enum Letter {
    /// The letter S (line ends).
    S,
    /// The letter O (line middle).
    O,
}

/// A cell on the SOS grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No letter written yet.
    #[default]
    Empty,
    /// Permanently holds a letter.
    Filled(Letter),
}

impl Cell {
    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Filled(letter) => Some(letter),
        }
    }

    /// Returns true if no letter has been written here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled(Letter::S) => 'S',
            Cell::Filled(Letter::O) => 'O',
        }
    }
}

/// A grid coordinate, ordered row first then column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    derive_new::new,
)]
#[display("{row},{col}")]
pub struct Coord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coord {
    /// True if `other` is within one step in every direction (diagonals included).
    ///
    /// A coordinate is adjacent to itself; callers exclude that case.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Signed step from `self` to `other`.
    pub fn delta_to(self, other: Coord) -> (isize, isize) {
        (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        )
    }

    /// Moves by a signed step; `None` when it would leave the first quadrant.
    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Side length of a square grid. Fixed for the lifetime of a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum GridSize {
    /// 7×7 grid.
    #[default]
    #[display("7x7")]
    Seven,
    /// 8×8 grid.
    #[display("8x8")]
    Eight,
    /// 9×9 grid.
    #[display("9x9")]
    Nine,
}

impl GridSize {
    /// Number of rows (and columns).
    pub fn side(self) -> usize {
        match self {
            GridSize::Seven => 7,
            GridSize::Eight => 8,
            GridSize::Nine => 9,
        }
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = DomainError;

    #[instrument]
    fn try_from(side: usize) -> Result<Self, Self::Error> {
        GridSize::iter()
            .find(|size| size.side() == side)
            .ok_or(DomainError::GridSize(side))
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.side()
    }
}

/// Number of seats at the table, always between 2 and 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "usize", into = "usize")]
pub struct PlayerCount(usize);

impl PlayerCount {
    /// Fewest players a match can have.
    pub const MIN: usize = 2;
    /// Most players a match can have (one per palette color).
    pub const MAX: usize = PALETTE.len();

    /// Returns the count as a plain number.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = DomainError;

    #[instrument]
    fn try_from(count: usize) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(DomainError::PlayerCount(count))
        }
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> Self {
        count.0
    }
}

/// Display color assigned to a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum PlayerColor {
    /// First seat.
    Orange,
    /// Second seat.
    Green,
    /// Third seat.
    Blue,
    /// Fourth seat.
    Magenta,
}

/// Seat colors in turn order.
pub const PALETTE: [PlayerColor; 4] = [
    PlayerColor::Orange,
    PlayerColor::Green,
    PlayerColor::Blue,
    PlayerColor::Magenta,
];

impl PlayerColor {
    /// Hex code handed to renderers.
    pub fn hex(self) -> &'static str {
        match self {
            PlayerColor::Orange => "#FF5733",
            PlayerColor::Green => "#33FF57",
            PlayerColor::Blue => "#3357FF",
            PlayerColor::Magenta => "#F333FF",
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// Rejected domain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DomainError {
    /// Grid side outside {7, 8, 9}.
    #[display("Grid size {} is not one of 7, 8 or 9", _0)]
    GridSize(#[error(not(source))] usize),
    /// Player count outside 2..=4.
    #[display("Player count {} is not between 2 and 4", _0)]
    PlayerCount(#[error(not(source))] usize),
}
