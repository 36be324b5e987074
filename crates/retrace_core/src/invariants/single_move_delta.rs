//! Single move invariant: consecutive snapshots differ by one new mark.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: snapshot `k` adds exactly one mark to snapshot `k - 1`.
///
/// The changed square must have been empty and must now hold the mark of
/// the player who moves at step `k - 1`.
pub struct SingleMoveDeltaInvariant;

impl Invariant<GameState> for SingleMoveDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(prev_step, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let mut changed = before.diff(after);
                match (changed.next(), changed.next()) {
                    (Some(pos), None) => {
                        before.get(pos) == Square::Empty
                            && after.get(pos) == Square::Occupied(Player::for_step(prev_step))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, History, Position};

    fn state_with(snapshots: Vec<Board>) -> GameState {
        let mut state = GameState::new();
        state.history = History::from_snapshots(snapshots);
        state
    }

    #[test]
    fn test_legal_sequence_holds() {
        let state = GameState::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .apply_move(Position::BottomRight);
        assert!(SingleMoveDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let b1 = Board::new().with(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleMoveDeltaInvariant::holds(&state_with(vec![Board::new(), b1])));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let b1 = Board::new()
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!SingleMoveDeltaInvariant::holds(&state_with(vec![Board::new(), b1])));
    }

    #[test]
    fn test_unchanged_snapshot_violates() {
        assert!(!SingleMoveDeltaInvariant::holds(&state_with(vec![
            Board::new(),
            Board::new()
        ])));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let b1 = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let b2 = b1.with(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleMoveDeltaInvariant::holds(&state_with(vec![Board::new(), b1, b2])));
    }
}
