//! Error handling for the dashboard

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A theme key outside the fixed theme set.
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),

    /// A learning path key outside the fixed path set.
    #[error("Unknown learning path '{0}'")]
    UnknownPath(String),

    /// The home directory could not be resolved for the default config location.
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// The configuration file could not be read or parsed.
    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A log subscriber was already installed for this process.
    #[error("Failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),

    /// Terminal or file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn config(path: &std::path::Path, message: impl ToString) -> Self {
        DashboardError::Config {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}
