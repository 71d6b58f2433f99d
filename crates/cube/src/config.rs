//! Storage configuration
//!
//! Settings come from, in increasing priority: built-in defaults, a TOML
//! file, and `BIGCUBE_*` environment variables.

use crate::io::face_state_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use thiserror::Error;

/// Environment variable naming the face-state directory
pub const ENV_DATA_DIR: &str = "BIGCUBE_DATA";
/// Environment variable toggling count verification after load
pub const ENV_VERIFY_ON_LOAD: &str = "BIGCUBE_VERIFY_ON_LOAD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write config {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where face states live and how they are checked on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding `face<id>.bin` files
    pub data_dir: PathBuf,
    /// Run count verification after every load
    pub verify_on_load: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            verify_on_load: true,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load a TOML file; missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Save as pretty TOML, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, content).map_err(write_error)?;
        Ok(())
    }

    /// Apply `BIGCUBE_DATA` and `BIGCUBE_VERIFY_ON_LOAD` if set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = env::var(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(verify) = env::var(ENV_VERIFY_ON_LOAD)
            .ok()
            .and_then(|v| parse_flag(&v))
        {
            self.verify_on_load = verify;
        }
        self
    }

    /// Deterministic state file path for face `id`.
    pub fn face_path(&self, id: u8) -> PathBuf {
        face_state_path(&self.data_dir, id)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert!(config.verify_on_load);
    }

    #[test]
    fn test_face_path() {
        let config = StoreConfig {
            data_dir: PathBuf::from("state"),
            verify_on_load: false,
        };
        assert_eq!(config.face_path(5), Path::new("state").join("face5.bin"));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = StoreConfig::from_toml("data_dir = \"/var/cube\"\n").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/cube"));
        assert!(config.verify_on_load);
    }

    #[test]
    fn test_from_toml_rejects_bad_type() {
        assert!(matches!(
            StoreConfig::from_toml("verify_on_load = \"maybe\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("bigcube.toml");
        let config = StoreConfig {
            data_dir: PathBuf::from("faces"),
            verify_on_load: false,
        };

        config.save(&path).unwrap();
        assert_eq!(StoreConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
