//! Application state and input handling.
//!
//! [`App`] owns the current [`GameState`] and turns key presses and mouse
//! clicks into [`Interaction`]s. Each interaction is dispatched to
//! completion before the next input is read.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use derive_new::new;
use ratatui::layout::{Position as ScreenPosition, Rect};
use retrace_core::view::move_list;
use retrace_core::{GameState, Interaction, Position, dispatch};
use tracing::{debug, info, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Screen regions from the last draw, used to resolve mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Board cells in index order.
    pub cells: Vec<(Rect, Position)>,
    /// Visible move list rows and the history step each jumps to.
    pub history: Vec<(Rect, usize)>,
    /// The list order toggle button.
    pub toggle: Rect,
}

impl HitMap {
    /// Interaction for a click at `(column, row)`, if it lands on a target.
    #[instrument(skip(self))]
    pub fn resolve(&self, column: u16, row: u16) -> Option<Interaction> {
        let point = ScreenPosition::new(column, row);
        if let Some((_, pos)) = self.cells.iter().find(|(rect, _)| rect.contains(point)) {
            return Some(Interaction::CellClicked(pos.to_index()));
        }
        if let Some((_, step)) = self.history.iter().find(|(rect, _)| rect.contains(point)) {
            return Some(Interaction::HistoryClicked(*step));
        }
        self.toggle
            .contains(point)
            .then_some(Interaction::ToggleClicked)
    }
}

/// Main application state.
#[derive(Debug, new)]
pub struct App {
    state: GameState,
    #[new(value = "Position::Center")]
    cursor: Position,
    #[new(default)]
    focus: Focus,
    /// Index into the displayed move list, not a history step.
    #[new(default)]
    selected: usize,
    #[new(default)]
    notice: Option<String>,
    #[new(default)]
    hits: HitMap,
    #[new(default)]
    should_quit: bool,
}

impl App {
    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last rejected interaction, shown under the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where targets were drawn.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Dispatches an interaction, keeping the old state if it is refused.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn apply(&mut self, interaction: Interaction) {
        let selected_step = move_list(&self.state).get(self.selected).map(|e| e.step);
        match dispatch(&self.state, interaction) {
            Ok(next) => {
                if next == self.state {
                    debug!(?interaction, "Interaction left state unchanged");
                } else {
                    info!(?interaction, step = next.current_step(), "State updated");
                }
                self.state = next;
                self.notice = None;
                self.reselect(selected_step);
            }
            Err(e) => {
                warn!(error = %e, ?interaction, "Interaction rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
            self.apply(Interaction::CellClicked(cell));
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('t') => self.apply(Interaction::ToggleClicked),
            KeyCode::Char('n') => self.apply(Interaction::Restart),
            KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Char('k') => self.move_selection(-1),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Interaction::CellClicked(self.cursor.to_index()));
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = move_list(&self.state).get(self.selected) {
                    self.apply(Interaction::HistoryClicked(entry.step));
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event; only left-button presses act.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(interaction) = self.hits.resolve(event.column, event.row) else {
            return;
        };
        match interaction {
            Interaction::CellClicked(cell) => {
                self.focus = Focus::Board;
                self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
            }
            Interaction::HistoryClicked(step) => {
                self.focus = Focus::History;
                if let Some(row) = move_list(&self.state).iter().position(|e| e.step == step) {
                    self.selected = row;
                }
            }
            _ => {}
        }
        self.apply(interaction);
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.history().len();
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Keeps the selection on `step` if it is still listed, else clamps the row.
    fn reselect(&mut self, step: Option<usize>) {
        let rows = move_list(&self.state);
        let clamped = self.selected.min(rows.len().saturating_sub(1));
        self.selected = step
            .and_then(|step| rows.iter().position(|e| e.step == step))
            .unwrap_or(clamped);
    }
}
