//! Tracing subscriber setup for the binary

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop everything; the TUI owns the terminal
    Discard,
}

/// Install the global subscriber
///
/// `RUST_LOG` picks the filter when set; otherwise only warnings are shown.
/// `verbose` forces `debug`.
///
/// # Errors
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(io::sink).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))
}
