//! Outcome evaluation: winner, winning line, and draw in one pass.

use super::draw::is_full;
use super::win::{Line, winning_line};
use crate::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a single snapshot says about the game.
///
/// Outcomes are always derived from a board and never stored as the
/// source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// Owner of the winning line, if any.
    winner: Option<Player>,
    /// The three winning positions, if any.
    winning_line: Option<Line>,
    /// True when the board is full and nobody won.
    is_draw: bool,
}

impl Outcome {
    /// Owner of the winning line, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The three winning positions, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Projects the outcome onto the game status.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// True when the snapshot accepts no further moves.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }
}

/// Evaluates a board for a winner, the winning line, or a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    match winning_line(board) {
        Some((player, line)) => Outcome {
            winner: Some(player),
            winning_line: Some(line),
            is_draw: false,
        },
        None => Outcome {
            winner: None,
            winning_line: None,
            is_draw: is_full(board),
        },
    }
}
