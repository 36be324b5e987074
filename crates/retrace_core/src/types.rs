//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the player about to move when the game sits at `step`.
    ///
    /// X moves on even steps, O on odd steps. Equivalently, the mark that
    /// appears in snapshot `k` (k ≥ 1) belongs to `Player::for_step(k - 1)`.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values, so every snapshot in a game's history
/// is an independent copy and never shared mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `square`.
    #[must_use]
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions whose squares differ between `self` and `other`.
    pub fn diff<'a>(&'a self, other: &'a Board) -> impl Iterator<Item = Position> + 'a {
        Position::iter().filter(move |pos| self.get(*pos) != other.get(*pos))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True when no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
