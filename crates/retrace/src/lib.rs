//! Retrace terminal client.
//!
//! A terminal front end for [`retrace_core`]: an interactive ratatui UI
//! and a headless replay command, driven by a small CLI and an optional
//! TOML config file.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::{App, Focus, HitMap};
pub use cli::{Cli, Command};
pub use config::{ConfigError, RetraceConfig};
