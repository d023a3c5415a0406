//! Game rules for SOS.
//!
//! Pure functions evaluating grid state. Rules are kept apart from the
//! stores so the state machine and the contracts can share them.

pub mod endgame;
pub mod slash;

pub use endgame::final_outcome;
pub use slash::{SlashVerdict, validate_slash};
