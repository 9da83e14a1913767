mod config;

pub use config::{Config, LogConfig, MessagesConfig, TimerConfig};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// `~/.config/fibbr[-dev]/` based on FIBBR_ENV, without touching the disk.
///
/// Set FIBBR_ENV=dev to use development data directory.
pub fn data_dir_path() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FIBBR_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("fibbr-dev")
    } else {
        base_dir.join("fibbr")
    }
}

/// Returns [`data_dir_path`], creating it if needed.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = data_dir_path();
    std::fs::create_dir_all(&dir).map_err(|e| {
        ConfigError::DataDir(format!("{}: {e}", dir.display()))
    })?;
    Ok(dir)
}
