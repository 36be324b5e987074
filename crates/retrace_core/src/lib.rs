//! Tic-tac-toe with move history and time travel.
//!
//! This crate is the pure core of retrace: no I/O, no threads, no clocks.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] judges a single board for a winner, winning
//!   line, or draw.
//! - **State**: [`GameState`] holds the snapshot [`History`], the current
//!   step, and the list order preference. Transitions return new states.
//! - **Invariants**: composable checks run after every transition in debug
//!   builds.
//! - **View**: status text, move list, and highlights for a front end.
//! - **Dispatch**: maps an [`Interaction`] to a transition.
//!
//! # Example
//!
//! ```
//! use retrace_core::{GameState, Player, Position};
//!
//! let state = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::TopCenter)
//!     .apply_move(Position::Center)
//!     .apply_move(Position::TopRight)
//!     .apply_move(Position::BottomRight);
//! assert_eq!(state.outcome().winner(), Some(Player::X));
//!
//! let rewound = state.jump_to(1).unwrap().apply_move(Position::MiddleRight);
//! assert_eq!(rewound.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dispatch;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
pub mod view;

pub use dispatch::{Interaction, dispatch};
pub use error::{InteractionError, JumpError, MoveError, StateError};
pub use history::{History, Snapshot};
pub use position::Position;
pub use rules::{Line, Outcome, evaluate};
pub use state::GameState;
pub use types::{Board, GameStatus, Player, Square};
