mod config;
mod params;

pub use config::{Config, DisplayConfig, PollingConfig, SprintConfig};
pub use params::ParamStore;

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `SCRUMPY_DATA_DIR` overrides the location. Otherwise the directory is
/// `~/.config/scrumpy[-dev]/`, with SCRUMPY_ENV=dev selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("SCRUMPY_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("SCRUMPY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("scrumpy-dev")
            } else {
                base_dir.join("scrumpy")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
