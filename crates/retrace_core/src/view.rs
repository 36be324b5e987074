//! Presentation-ready views derived from a [`GameState`].
//!
//! Nothing here holds state of its own: a front end renders whatever these
//! functions return and feeds clicks back through
//! [`dispatch`](crate::dispatch::dispatch).

use crate::{GameState, GameStatus, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Label for one history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDescription {
    /// The empty starting board.
    GameStart,
    /// The board after move `step`, which marked `position`.
    Move {
        /// Move number, equal to the history index.
        step: usize,
        /// Cell that changed on this move.
        position: Position,
    },
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::GameStart => write!(f, "Go to game start"),
            MoveDescription::Move { step, position } => write!(
                f,
                "Go to move #{} at row {}, col {}",
                step,
                position.row(),
                position.col()
            ),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// What the entry says.
    pub description: MoveDescription,
    /// Whether this entry is the snapshot being shown.
    pub is_current: bool,
}

/// Describes history entry `step`, or `None` if no such entry exists.
#[instrument(skip(state))]
pub fn describe(state: &GameState, step: usize) -> Option<MoveDescription> {
    if step == 0 {
        return Some(MoveDescription::GameStart);
    }
    state
        .history()
        .changed_cell(step)
        .map(|position| MoveDescription::Move { step, position })
}

/// The move list in display order.
///
/// One entry per history snapshot. When the list is descending the entries
/// are reversed, but each keeps the step number it jumps to.
#[instrument(skip(state), fields(len = state.history().len(), ascending = state.list_ascending()))]
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let mut entries: Vec<MoveEntry> = (0..state.history().len())
        .filter_map(|step| {
            describe(state, step).map(|description| MoveEntry {
                step,
                description,
                is_current: step == state.current_step(),
            })
        })
        .collect();

    if !state.list_ascending() {
        entries.reverse();
    }
    entries
}

/// Status line for the current snapshot.
#[instrument(skip(state))]
pub fn status_text(state: &GameState) -> String {
    match state.status() {
        GameStatus::Draw => "Tie game".to_string(),
        GameStatus::Won(player) => format!("Winner: {}", player),
        GameStatus::InProgress => format!("Next player: {}", state.to_move()),
    }
}

/// Whether `pos` belongs to the current winning line.
pub fn is_highlighted(state: &GameState, pos: Position) -> bool {
    state
        .winning_line()
        .is_some_and(|line| line.contains(&pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices
            .iter()
            .filter_map(|i| Position::from_index(*i))
            .fold(GameState::new(), |s, p| s.apply_move(p))
    }

    #[test]
    fn test_descriptions_use_one_based_coordinates() {
        let state = play(&[0, 5, 7]);
        assert_eq!(describe(&state, 0).unwrap().to_string(), "Go to game start");
        assert_eq!(
            describe(&state, 1).unwrap().to_string(),
            "Go to move #1 at row 1, col 1"
        );
        assert_eq!(
            describe(&state, 2).unwrap().to_string(),
            "Go to move #2 at row 2, col 3"
        );
        assert_eq!(
            describe(&state, 3).unwrap().to_string(),
            "Go to move #3 at row 3, col 2"
        );
        assert_eq!(describe(&state, 4), None);
    }

    #[test]
    fn test_current_entry_is_marked() {
        let state = play(&[0, 4, 8]).jump_to(1).expect("step exists");
        let current: Vec<usize> = move_list(&state)
            .iter()
            .filter(|e| e.is_current)
            .map(|e| e.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_descending_list_keeps_step_numbers() {
        let state = play(&[0, 4, 8]).toggle_order();
        let steps: Vec<usize> = move_list(&state).iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);
        assert_eq!(
            move_list(&state)[0].description.to_string(),
            "Go to move #3 at row 3, col 3"
        );
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&GameState::new()), "Next player: X");
        assert_eq!(status_text(&play(&[4])), "Next player: O");
        assert_eq!(status_text(&play(&[0, 1, 4, 2, 8])), "Winner: X");
        assert_eq!(status_text(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8])), "Tie game");
    }

    #[test]
    fn test_highlight_follows_winning_line() {
        let state = play(&[0, 1, 4, 2, 8]);
        assert!(is_highlighted(&state, Position::TopLeft));
        assert!(is_highlighted(&state, Position::Center));
        assert!(!is_highlighted(&state, Position::TopCenter));

        let earlier = state.jump_to(4).expect("step exists");
        assert!(!is_highlighted(&earlier, Position::TopLeft));
    }
}
