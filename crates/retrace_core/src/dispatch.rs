//! Interaction dispatch.
//!
//! Every user gesture a front end can produce maps to exactly one pure
//! state transition. Dispatch runs synchronously to completion; the caller
//! swaps in the returned state (or keeps the old one on error).

use crate::error::InteractionError;
use crate::{GameState, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user gesture, independent of how the front end captured it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    /// A board cell (0-8, row-major) was clicked.
    CellClicked(usize),
    /// A move list entry for the given history step was clicked.
    HistoryClicked(usize),
    /// The list order toggle was clicked.
    ToggleClicked,
    /// A new game was requested.
    Restart,
}

/// Applies `interaction` to `state`, returning the next state.
///
/// Clicks on occupied cells or on a finished board are not errors: they
/// produce an unchanged state.
///
/// # Errors
///
/// - [`InteractionError::CellOutOfRange`] for a cell index above 8.
/// - [`InteractionError::Jump`] for a history step that does not exist.
#[instrument(skip(state), fields(step = state.current_step()))]
pub fn dispatch(state: &GameState, interaction: Interaction) -> Result<GameState, InteractionError> {
    debug!(?interaction, "Dispatching interaction");

    match interaction {
        Interaction::CellClicked(index) => {
            let pos = Position::from_index(index).ok_or(InteractionError::CellOutOfRange(index))?;
            Ok(state.apply_move(pos))
        }
        Interaction::HistoryClicked(step) => Ok(state.jump_to(step)?),
        Interaction::ToggleClicked => Ok(state.toggle_order()),
        Interaction::Restart => Ok(state.restart()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JumpError;

    #[test]
    fn test_cell_click_applies_move() {
        let state = dispatch(&GameState::new(), Interaction::CellClicked(4)).unwrap();
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn test_cell_out_of_range_rejected() {
        assert_eq!(
            dispatch(&GameState::new(), Interaction::CellClicked(9)),
            Err(InteractionError::CellOutOfRange(9))
        );
    }

    #[test]
    fn test_history_click_out_of_range_rejected() {
        assert_eq!(
            dispatch(&GameState::new(), Interaction::HistoryClicked(1)),
            Err(InteractionError::Jump(JumpError::StepOutOfRange { step: 1, len: 1 }))
        );
    }

    #[test]
    fn test_toggle_and_restart() {
        let state = dispatch(&GameState::new(), Interaction::CellClicked(0)).unwrap();
        let state = dispatch(&state, Interaction::ToggleClicked).unwrap();
        assert!(!state.list_ascending());
        let state = dispatch(&state, Interaction::Restart).unwrap();
        assert_eq!(state.history().len(), 1);
        assert!(!state.list_ascending());
    }
}
