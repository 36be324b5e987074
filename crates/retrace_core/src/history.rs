//! Ordered board snapshots from game start to the latest move.

use crate::error::StateError;
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One immutable board configuration at a given move count.
pub type Snapshot = Board;

/// Snapshot sequence for one line of play.
///
/// `snapshots[0]` is always the empty board and `snapshots[k]` is the board
/// after move `k`. Nothing in here is ever edited in place: branching
/// builds a fresh history from a prefix of this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawHistory> for History {
    type Error = StateError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        match raw.snapshots.first() {
            None => Err(StateError::EmptyHistory),
            Some(root) if *root != Board::new() => Err(StateError::NonEmptyRoot),
            Some(_) => Ok(Self {
                snapshots: raw.snapshots,
            }),
        }
    }
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Wraps raw snapshots without checking them; used to build corrupt states.
    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the history holds no snapshots at all.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// The most recent snapshot on this branch.
    pub fn latest(&self) -> &Snapshot {
        // Non-empty by construction.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots in step order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over `(step, snapshot)` pairs.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &Snapshot)> {
        self.snapshots.iter().enumerate()
    }

    /// Builds the history that results from playing `next` after `step`.
    ///
    /// Snapshots after `step` are discarded and `next` becomes the new last
    /// entry. `step` past the end is clamped to the last snapshot.
    #[instrument(skip(self, next), fields(len = self.len()))]
    pub fn branch(&self, step: usize, next: Snapshot) -> Self {
        let keep = (step + 1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(next);
        Self { snapshots }
    }

    /// The cell that changed to produce snapshot `step`.
    ///
    /// Returns `None` for step 0, for steps past the end, and when the two
    /// snapshots are identical. If several cells differ the last one in
    /// index order is reported.
    pub fn changed_cell(&self, step: usize) -> Option<Position> {
        if step == 0 {
            return None;
        }
        let prev = self.snapshots.get(step - 1)?;
        let curr = self.snapshots.get(step)?;
        prev.diff(curr).last()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn mark(board: &Board, pos: Position, player: Player) -> Board {
        board.with(pos, Square::Occupied(player))
    }

    #[test]
    fn test_new_history_has_empty_root() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), &Board::new());
        assert!(!history.is_empty());
    }

    #[test]
    fn test_branch_at_end_appends() {
        let history = History::new();
        let next = mark(history.latest(), Position::Center, Player::X);
        let grown = history.branch(0, next);
        assert_eq!(grown.len(), 2);
        assert_eq!(history.len(), 1);
        assert_eq!(grown.latest(), &next);
    }

    #[test]
    fn test_branch_in_middle_discards_future() {
        let h = History::new();
        let b1 = mark(h.latest(), Position::TopLeft, Player::X);
        let h = h.branch(0, b1);
        let b2 = mark(h.latest(), Position::TopCenter, Player::O);
        let h = h.branch(1, b2);
        let b3 = mark(h.latest(), Position::TopRight, Player::X);
        let h = h.branch(2, b3);
        assert_eq!(h.len(), 4);

        let alt = mark(h.get(0).unwrap(), Position::MiddleRight, Player::X);
        let rebased = h.branch(0, alt);
        assert_eq!(rebased.len(), 2);
        assert_eq!(rebased.get(1), Some(&alt));
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let err = serde_json::from_str::<History>(r#"{"snapshots":[]}"#).unwrap_err();
        assert!(err.to_string().contains("History has no snapshots"));
    }

    #[test]
    fn test_deserialize_rejects_marked_root() {
        let marked = mark(&Board::new(), Position::Center, Player::X);
        let json = serde_json::json!({ "snapshots": [marked] });
        let err = serde_json::from_value::<History>(json).unwrap_err();
        assert!(err.to_string().contains("empty board"));
    }

    #[test]
    fn test_deserialize_accepts_serialized_history() {
        let h = History::new();
        let h = h.branch(0, mark(h.latest(), Position::TopLeft, Player::X));
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(serde_json::from_str::<History>(&json).unwrap(), h);
    }

    #[test]
    fn test_changed_cell_finds_move() {
        let h = History::new();
        let b1 = mark(h.latest(), Position::BottomCenter, Player::X);
        let h = h.branch(0, b1);
        assert_eq!(h.changed_cell(0), None);
        assert_eq!(h.changed_cell(1), Some(Position::BottomCenter));
        assert_eq!(h.changed_cell(2), None);
    }
}
