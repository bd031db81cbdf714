//! User configuration at ~/.config/schedgen/config.toml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::ics::{DEFAULT_FILE_NAME, TextEscaping};

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

fn default_escape_text() -> bool {
    true
}

/// Defaults for `schedgen generate`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Where generated calendars are written when `--output` is not given
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Escape `, ; \` and newlines in labels. `false` reproduces legacy output.
    #[serde(default = "default_escape_text")]
    pub escape_text: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            output: default_output(),
            escape_text: default_escape_text(),
        }
    }
}

impl ScheduleConfig {
    /// `None` when the platform has no config directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("schedgen").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when there is no file
    /// (or nowhere a file could be).
    pub fn load() -> ScheduleResult<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ScheduleError::Config(format!("{}: {e}", path.display())))
    }

    pub fn escaping(&self) -> TextEscaping {
        if self.escape_text {
            TextEscaping::Rfc5545
        } else {
            TextEscaping::Legacy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("schedgen-config-that-does-not-exist.toml");
        let config = ScheduleConfig::load_from(&path).unwrap();
        assert_eq!(config, ScheduleConfig::default());
        assert_eq!(config.output, PathBuf::from("schedule.ics"));
        assert_eq!(config.escaping(), TextEscaping::Rfc5545);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ScheduleConfig = toml::from_str("escape_text = false").unwrap();
        assert_eq!(config.output, PathBuf::from("schedule.ics"));
        assert_eq!(config.escaping(), TextEscaping::Legacy);

        let config: ScheduleConfig = toml::from_str("output = \"out/rota.ics\"").unwrap();
        assert_eq!(config.output, PathBuf::from("out/rota.ics"));
        assert!(config.escape_text);
    }

    #[test]
    fn invalid_config_is_reported() {
        let path = std::env::temp_dir().join(format!("schedgen-bad-config-{}.toml", std::process::id()));
        std::fs::write(&path, "escape_text = \"maybe\"").unwrap();

        let err = ScheduleConfig::load_from(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ScheduleError::Config(_)), "got {err:?}");
    }
}
