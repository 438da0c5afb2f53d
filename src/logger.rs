//! File logging backed by `fern`.
//!
//! The library only talks to the `log` facade; the binary calls [`init`] once
//! to route records into `$XDG_DATA_DIR/jsondate/jsondate.log`.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Install the global logger. Returns `false` when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    build_dispatch(config.level_filter()?, &path)?
        .apply()
        .context("Logger already initialized")?;

    log::info!("Logging to {}", path.display());
    Ok(true)
}

/// Dispatcher writing `[time LEVEL target] message` lines to `path`
pub fn build_dispatch(level: log::LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

