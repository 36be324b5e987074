//! Interactive terminal session.

use crate::app::App;
use crate::config::RetraceConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use retrace_core::GameState;
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(mouse = config.mouse(), ascending = config.list_ascending()))]
pub fn run_tui(config: &RetraceConfig) -> Result<()> {
    info!("Starting retrace TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if *config.mouse() {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(GameState::new().with_list_ascending(*config.list_ascending()));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    if *config.mouse() {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, then block for one input event and handle it to completion.
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    while !app.should_quit() {
        let mut hits = None;
        terminal.draw(|f| hits = Some(ui::draw(f, &app)))?;
        if let Some(hits) = hits {
            app.set_hits(hits);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}
