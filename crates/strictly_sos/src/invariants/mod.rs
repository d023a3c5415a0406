//! First-class invariants for SOS.
//!
//! Invariants are logical properties that must hold after every event the
//! engine accepts. They are testable independently and are checked in
//! debug builds after each transition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod drag_path_shape;
pub mod pending_selector;
pub mod score_matches_ledger;
pub mod terminal_grid_full;

pub use drag_path_shape::DragPathShapeInvariant;
pub use pending_selector::PendingSelectorInvariant;
pub use score_matches_ledger::ScoreMatchesLedgerInvariant;
pub use terminal_grid_full::TerminalGridFullInvariant;

/// All SOS engine invariants as a composable set.
pub type SosInvariants = (
    DragPathShapeInvariant,
    PendingSelectorInvariant,
    ScoreMatchesLedgerInvariant,
    TerminalGridFullInvariant,
);
