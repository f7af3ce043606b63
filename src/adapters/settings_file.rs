//! Settings loading from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::constants::DEFAULT_SETTINGS_FILE;
use crate::domain::settings::parse_settings_content;
use crate::domain::{AppError, ToolSettings};

/// Load settings.
///
/// An explicit path must exist. Without one, `consumer-chain-tool.toml` in
/// `cwd` is used when present, otherwise the built-in defaults.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<ToolSettings, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::SettingsFileMissing(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = cwd.join(DEFAULT_SETTINGS_FILE);
            if !candidate.is_file() {
                debug!("no settings file found, using defaults");
                return Ok(ToolSettings::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading settings");
    let content = fs::read_to_string(&path)?;
    parse_settings_content(&content)
}
