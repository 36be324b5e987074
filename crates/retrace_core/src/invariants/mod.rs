//! First-class invariants for time-travelling game state.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are testable independently and are checked in debug
//! builds by every [`GameState`](crate::GameState) transition.

use crate::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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
/// Implementations are provided for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
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
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod history_root;
pub mod no_moves_past_end;
pub mod single_move_delta;
pub mod step_in_bounds;
pub mod winning_line;

pub use history_root::HistoryRootInvariant;
pub use no_moves_past_end::NoMovesPastEndInvariant;
pub use single_move_delta::SingleMoveDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;
pub use winning_line::WinningLineInvariant;

/// All game state invariants as a composable set.
pub type RetraceInvariants = (
    HistoryRootInvariant,
    StepInBoundsInvariant,
    SingleMoveDeltaInvariant,
    NoMovesPastEndInvariant,
    WinningLineInvariant,
);

/// Checks every invariant, logging and panicking on violation in debug builds.
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = RetraceInvariants::check_all(state)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        panic!("Game state invariants violated: {:?}", violations);
    }
}
