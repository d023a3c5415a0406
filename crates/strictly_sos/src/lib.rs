//! Strictly SOS - rule engine for the SOS grid word game
//!
//! Players take turns writing S or O into an empty cell of a 7×7, 8×8 or
//! 9×9 grid, then slash three aligned cells reading S-O-S to score a point
//! and earn a bonus placement. The match ends when the grid is full.
//!
//! # Architecture
//!
//! - **Grid**: write-once letter matrix
//! - **Roster**: players, colors, scores, turn order
//! - **Ledger**: scored lines, keyed by direction-independent id
//! - **Gesture**: turns cell-enter events into a straight 3-cell line
//! - **Game**: the phase machine, driven by one [`Event`] at a time
//!
//! # Example
//!
//! ```
//! use strictly_sos::{Coord, Effect, Letter, Phase, SosGame};
//!
//! let mut game = SosGame::new();
//! game.start()?;
//! game.place(Coord::new(0, 0), Letter::S)?;
//! assert_eq!(game.phase(), Phase::Claiming);
//! assert_eq!(game.end_turn()?, Effect::TurnEnded { next: 1 });
//! # Ok::<(), strictly_sos::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod game;
mod gesture;
mod grid;
mod invariants;
mod ledger;
mod phases;
mod roster;
mod rules;
mod snapshot;
mod types;

// Crate-level exports - Events and errors
pub use action::{Effect, Event, GameError};

// Crate-level exports - Engine
pub use game::SosGame;
pub use phases::{Outcome, Phase};
pub use snapshot::Snapshot;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Stores
pub use gesture::{DragPath, DragStep, Line, MAX_PATH};
pub use grid::{Grid, PlaceError};
pub use ledger::{LineId, LineLedger, ScoredLine};
pub use roster::{Player, PlayerId, Roster};

// Crate-level exports - Rules and invariants
pub use contracts::{Contract, EndTurnContract, PlacementContract};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SosInvariants};
pub use rules::{SlashVerdict, validate_slash};

// Crate-level exports - Domain types
pub use types::{Cell, Coord, DomainError, GridSize, Letter, PALETTE, PlayerColor, PlayerCount};
