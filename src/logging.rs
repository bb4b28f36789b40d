//! File logging
//!
//! The dashboard owns the terminal, so log records go to a file when one is
//! requested and are discarded otherwise. `RUST_LOG` controls the level.

use crate::error::DashboardError;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::util::SubscriberInitExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Level filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Builds a subscriber writing plain, timestamped lines to `file`.
pub fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_ansi(false) // No color codes in log file
        .finish()
}

/// Installs a global subscriber appending to `path`, filtered by `RUST_LOG`.
pub fn init_file_logger(path: &Path) -> Result<(), DashboardError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    file_subscriber(file, env_filter()).try_init()?;
    Ok(())
}
