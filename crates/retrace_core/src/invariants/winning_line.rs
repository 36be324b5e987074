//! Winning line invariant: the stored line matches the current snapshot.

use super::Invariant;
use crate::GameState;
use crate::rules::evaluate;

/// Invariant: the cached winning line equals a fresh evaluation.
pub struct WinningLineInvariant;

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .get(state.current_step())
            .is_some_and(|board| evaluate(board).winning_line() == state.winning_line())
    }

    fn description() -> &'static str {
        "Winning line matches the current snapshot"
    }
}
