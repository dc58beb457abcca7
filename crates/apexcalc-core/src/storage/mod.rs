mod config;

pub use config::{Config, EngineConfig, OutputConfig, ReplConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the configuration directory, creating it if needed.
///
/// `APEXCALC_CONFIG_DIR` overrides the location entirely. Otherwise the
/// directory is `~/.config/apexcalc[-dev]/`, with `APEXCALC_ENV=dev`
/// selecting the development variant.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("APEXCALC_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("APEXCALC_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("apexcalc-dev")
            } else {
                base_dir.join("apexcalc")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
