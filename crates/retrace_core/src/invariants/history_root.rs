//! History root invariant: the history starts at the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history holds at least one snapshot and the first is empty.
pub struct HistoryRootInvariant;

impl Invariant<GameState> for HistoryRootInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History begins with the empty board"
    }
}
