use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber. Output goes to a file because the terminal
/// belongs to the UI; without a log path nothing is installed.
pub fn init_logging(config: &Config) -> AppResult<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    let filter = if config.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::invalid_argument(format!("failed to initialize logging: {err}")))?;

    info!(path = %path.display(), variant = config.variant.id(), "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> AppResult<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to create log directory: {}", parent.display()),
            )
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })
}
