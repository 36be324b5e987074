//! Step bounds invariant: the step pointer names an existing snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step points into history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jump() {
        let state = GameState::new()
            .apply_move(Position::Center)
            .jump_to(0)
            .expect("step exists");
        assert!(StepInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut state = GameState::new();
        state.current_step = 1;
        assert!(!StepInBoundsInvariant::holds(&state));
    }
}
