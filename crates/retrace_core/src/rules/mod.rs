//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules never look at history or turn
//! order, so any snapshot can be judged in isolation.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, Line, check_winner, winning_line};
