//! Runtime configuration for the retrace terminal client.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "retrace.toml";

/// Settings read from `retrace.toml` and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RetraceConfig {
    /// Show the move list oldest-first when a game starts.
    #[serde(default = "default_list_ascending")]
    list_ascending: bool,

    /// Capture mouse clicks on cells and history entries.
    #[serde(default = "default_mouse")]
    mouse: bool,

    /// Where the interactive client writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_list_ascending() -> bool {
    true
}

fn default_mouse() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("retrace.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RetraceConfig {
    fn default() -> Self {
        Self {
            list_ascending: default_list_ascending(),
            mouse: default_mouse(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl RetraceConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else `retrace.toml` if present, else defaults.
    ///
    /// An explicitly named file must exist; the implicit one is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, descending: bool, no_mouse: bool) -> Self {
        if descending {
            self.list_ascending = false;
        }
        if no_mouse {
            self.mouse = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
