//! Time-travelling game state.
//!
//! A [`GameState`] is an immutable value: every transition borrows the
//! current state and returns a new one. The player to move is never
//! stored; it is derived from the parity of the current step so it cannot
//! drift from the history.

use crate::error::{JumpError, MoveError, StateError};
use crate::history::{History, Snapshot};
use crate::invariants::{InvariantSet, RetraceInvariants, assert_invariants};
use crate::rules::{Line, Outcome, evaluate};
use crate::{GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: history, step pointer, and list-order preference.
///
/// Deserialized states are checked against every invariant and refused
/// with a [`StateError`] instead of being accepted half-valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Snapshots on the current branch.
    pub(crate) history: History,
    /// Index of the snapshot being shown.
    pub(crate) current_step: usize,
    /// Whether the move list is shown oldest-first.
    pub(crate) list_ascending: bool,
    /// Winning line of the current snapshot, if any.
    pub(crate) winning_line: Option<Line>,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    current_step: usize,
    list_ascending: bool,
    winning_line: Option<Line>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            history: raw.history,
            current_step: raw.current_step,
            list_ascending: raw.list_ascending,
            winning_line: raw.winning_line,
        };
        RetraceInvariants::check_all(&state).map_err(|violations| {
            let described: Vec<String> = violations.iter().map(ToString::to_string).collect();
            StateError::Invariants(described.join("; "))
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            list_ascending: true,
            winning_line: None,
        }
    }

    /// Returns a copy with the list order preference set.
    #[must_use]
    pub fn with_list_ascending(mut self, ascending: bool) -> Self {
        self.list_ascending = ascending;
        self
    }

    /// Returns the history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list is displayed oldest-first.
    pub fn list_ascending(&self) -> bool {
        self.list_ascending
    }

    /// Winning line of the current snapshot, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// The snapshot at the current step.
    pub fn current_board(&self) -> &Snapshot {
        // current_step is always in bounds.
        &self.history.snapshots()[self.current_step]
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Outcome of the current snapshot.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        self.outcome().status()
    }

    /// Plays the mover's mark at `pos`, explaining any rejection.
    ///
    /// On success any snapshots after the current step are discarded before
    /// the new snapshot is appended, and the new snapshot becomes current.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    /// - [`MoveError::GameOver`] if the current snapshot is won or drawn.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.to_move()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<GameState, MoveError> {
        let board = self.current_board();

        if evaluate(board).is_over() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let next = board.with(pos, Square::Occupied(self.to_move()));
        let history = self.history.branch(self.current_step, next);
        let current_step = history.len() - 1;

        let state = GameState {
            history,
            current_step,
            list_ascending: self.list_ascending,
            winning_line: evaluate(&next).winning_line(),
        };

        debug!(
            step = state.current_step,
            discarded = self.history.len() - (self.current_step + 1),
            "Move applied"
        );
        assert_invariants(&state);
        Ok(state)
    }

    /// Plays the mover's mark at `pos`.
    ///
    /// Moves onto an occupied square or after the game has ended are
    /// ignored and an identical state is returned.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, pos: Position) -> GameState {
        self.try_apply_move(pos).unwrap_or_else(|err| {
            debug!(error = %err, "Move ignored");
            self.clone()
        })
    }

    /// Makes `step` the current snapshot.
    ///
    /// History is left untouched; a later move branches from `step`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` is not an index
    /// into the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, JumpError> {
        let board = self.history.get(step).ok_or(JumpError::StepOutOfRange {
            step,
            len: self.history.len(),
        })?;

        let state = GameState {
            history: self.history.clone(),
            current_step: step,
            list_ascending: self.list_ascending,
            winning_line: evaluate(board).winning_line(),
        };

        debug!(from = self.current_step, to = step, "Jumped");
        assert_invariants(&state);
        Ok(state)
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self), fields(ascending = self.list_ascending))]
    pub fn toggle_order(&self) -> GameState {
        GameState {
            list_ascending: !self.list_ascending,
            ..self.clone()
        }
    }

    /// Starts over with an empty board, keeping the list order preference.
    #[instrument(skip(self))]
    pub fn restart(&self) -> GameState {
        GameState::new().with_list_ascending(self.list_ascending)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
