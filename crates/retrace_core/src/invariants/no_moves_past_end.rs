//! Terminal snapshot invariant: nothing is played after a win or draw.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate;

/// Invariant: only the last snapshot of a history may be won or drawn.
pub struct NoMovesPastEndInvariant;

impl Invariant<GameState> for NoMovesPastEndInvariant {
    fn holds(state: &GameState) -> bool {
        let snapshots = state.history().snapshots();
        let last = snapshots.len().saturating_sub(1);
        snapshots[..last]
            .iter()
            .all(|snapshot| !evaluate(snapshot).is_over())
    }

    fn description() -> &'static str {
        "No snapshot follows a won or drawn board"
    }
}
