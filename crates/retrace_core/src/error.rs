//! Error types for game state transitions.

use crate::Position;

/// Why a move was not applied.
///
/// [`GameState::apply_move`](crate::GameState::apply_move) swallows these
/// and returns the state unchanged; [`GameState::try_apply_move`](crate::GameState::try_apply_move)
/// surfaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Why a jump through history was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step does not exist in the history.
    #[display("Step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// Why a serialized game was refused on load.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// The history holds no snapshots.
    #[display("History has no snapshots")]
    EmptyHistory,

    /// The first snapshot is not the empty board.
    #[display("History does not start from an empty board")]
    NonEmptyRoot,

    /// The state breaks one or more invariants.
    #[display("Game state invariants violated: {}", _0)]
    Invariants(String),
}

impl std::error::Error for StateError {}

/// Why an interaction could not be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum InteractionError {
    /// A cell index outside 0-8 was clicked.
    #[display("Cell {} is not on the board", _0)]
    #[from(skip)]
    CellOutOfRange(usize),

    /// A history entry that does not exist was selected.
    #[display("{}", _0)]
    Jump(JumpError),
}

impl std::error::Error for InteractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InteractionError::CellOutOfRange(_) => None,
            InteractionError::Jump(err) => Some(err),
        }
    }
}
