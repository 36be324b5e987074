//! Retrace - unified CLI.

use anyhow::Result;
use clap::Parser;
use retrace::cli::{Cli, Command};
use retrace::config::RetraceConfig;
use retrace::{logging, replay, terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RetraceConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            descending,
            no_mouse,
        } => {
            let config = config.with_overrides(descending, no_mouse);
            logging::init_file(config.log_file(), config.log_filter())?;
            terminal::run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            json,
            descending,
        } => {
            logging::init_stderr(config.log_filter());
            let config = config.with_overrides(descending, false);
            let state = replay::replay(&moves, jump, *config.list_ascending())?;
            let output = if json {
                replay::render_json(&state)?
            } else {
                replay::render_text(&state)
            };
            print!("{}", output);
            Ok(())
        }
    }
}
