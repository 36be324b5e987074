//! Stateless UI rendering.
//!
//! [`draw`] renders an [`App`] and reports where clickable targets ended up
//! so the next mouse event can be resolved against the same layout.

use crate::app::{App, Focus, HitMap};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use retrace_core::view::{is_highlighted, move_list, status_text};
use retrace_core::{GameState, Player, Position, Square};
use strum::IntoEnumIterator;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const TOGGLE_LABEL: &str = "[ Reverse list order ]";

/// Renders the whole screen and returns the click targets.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2),
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Retrace - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CELL_WIDTH * 3 + 4), Constraint::Min(20)])
        .split(chunks[1]);

    let cells = draw_board(frame, panels[0], app);
    let (toggle, history) = draw_info(frame, panels[1], app);

    let help = Paragraph::new(
        "1-9/arrows+enter: play  tab: focus  j/k: history  t: reverse  n: new  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);

    HitMap {
        cells,
        history,
        toggle,
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, Position)> {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Yellow),
        Focus::History => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut cells = Vec::with_capacity(9);
    for pos in Position::iter() {
        let rect = Rect::new(
            inner.x + (pos.col() as u16 - 1) * CELL_WIDTH,
            inner.y + (pos.row() as u16 - 1) * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner);
        draw_cell(frame, rect, app, pos);
        cells.push((rect, pos));
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let state = app.state();

    let (symbol, mut style) = match state.current_board().get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    if is_highlighted(state, pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) -> (Rect, Vec<(Rect, usize)>) {
    let state = app.state();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Toggle
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(status, rows[0]);

    if let Some(notice) = app.notice() {
        let notice = Paragraph::new(notice).style(Style::default().fg(Color::Red));
        frame.render_widget(notice, rows[1]);
    }

    let toggle = Rect {
        width: (TOGGLE_LABEL.len() as u16).min(rows[2].width),
        ..rows[2]
    };
    frame.render_widget(
        Paragraph::new(TOGGLE_LABEL).style(Style::default().fg(Color::Cyan)),
        toggle,
    );

    let history = draw_moves(frame, rows[3], app, state);
    (toggle, history)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, state: &GameState) -> Vec<(Rect, usize)> {
    let border_style = match app.focus() {
        Focus::History => Style::default().fg(Color::Yellow),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .title("Moves")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut targets = Vec::new();
    for (row, entry) in move_list(state).iter().enumerate() {
        let Ok(offset) = u16::try_from(row) else {
            break;
        };
        if offset >= inner.height {
            break;
        }
        let rect = Rect::new(inner.x, inner.y + offset, inner.width, 1);

        let mut style = Style::default();
        if entry.is_current {
            style = style.add_modifier(Modifier::BOLD);
        }
        if app.focus() == Focus::History && row == app.selected() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let line = format!("{:>2}. {}", entry.step + 1, entry.description);
        frame.render_widget(Paragraph::new(Span::styled(line, style)), rect);
        targets.push((rect, entry.step));
    }
    targets
}
