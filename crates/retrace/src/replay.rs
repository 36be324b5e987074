//! Headless replay: play a move sequence and print the result.

use anyhow::{Context, Result};
use retrace_core::view::{is_highlighted, move_list, status_text};
use retrace_core::{GameState, Interaction, Position, Square, dispatch};
use serde::Serialize;
use tracing::{info, instrument};

/// JSON shape printed by `replay --json`.
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    status: String,
    state: &'a GameState,
    moves: Vec<String>,
}

/// Plays `moves` (cell indices), optionally jumps to `jump`, and returns the game.
///
/// Moves onto occupied cells or after the game ends are skipped the same way
/// the interactive client skips them.
///
/// # Errors
///
/// Fails on a cell index above 8 or a jump past the end of history.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, ascending: bool) -> Result<GameState> {
    let mut state = GameState::new().with_list_ascending(ascending);

    for (i, &cell) in moves.iter().enumerate() {
        state = dispatch(&state, Interaction::CellClicked(cell))
            .with_context(|| format!("Move {} (cell {}) rejected", i + 1, cell))?;
    }

    if let Some(step) = jump {
        state = dispatch(&state, Interaction::HistoryClicked(step))
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(
        len = state.history().len(),
        step = state.current_step(),
        "Replay finished"
    );
    Ok(state)
}

/// Renders a game as plain text: board, status, and move list.
///
/// Winning cells are wrapped in brackets and the current move is marked
/// with `>`.
pub fn render_text(state: &GameState) -> String {
    let board = state.current_board();
    let mut out = String::new();

    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| {
                let mark = match board.get(pos) {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                if is_highlighted(state, pos) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&status_text(state));
    out.push_str("\n\n");

    for entry in move_list(state) {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step + 1, entry.description));
    }
    out
}

/// Renders a game as pretty-printed JSON.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json(state: &GameState) -> Result<String> {
    let report = ReplayReport {
        status: status_text(state),
        state,
        moves: move_list(state)
            .iter()
            .map(|entry| entry.description.to_string())
            .collect(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize game state")
}
