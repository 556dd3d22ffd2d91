//! Service configuration, environment-driven.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DocextError, Result};

/// Default maximum upload size: 50 MiB.
pub const DEFAULT_MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Default retention window for uploaded files, in hours.
pub const DEFAULT_RETENTION_HOURS: u64 = 1;

/// The only accepted upload extension.
pub const ALLOWED_EXTENSION: &str = "pdf";

/// Configuration for the docext service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory receiving uploaded files.
    pub upload_dir: PathBuf,

    /// Maximum accepted upload size in bytes.
    pub max_file_size: usize,

    /// Hours after which leftover uploads are deleted by the sweeper.
    pub retention_hours: u64,

    /// Optional API key. Authentication is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            retention_hours: DEFAULT_RETENTION_HOURS,
            api_key: None,
        }
    }
}

impl ServiceConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables: `DOCEXT_UPLOAD_DIR`, `DOCEXT_MAX_FILE_SIZE_MB`,
    /// `DOCEXT_RETENTION_HOURS`, `API_KEY`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("DOCEXT_UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Some(mb) = env_parse::<usize>("DOCEXT_MAX_FILE_SIZE_MB") {
            config.max_file_size = mb * 1024 * 1024;
        }
        if let Some(hours) = env_parse::<u64>("DOCEXT_RETENTION_HOURS") {
            config.retention_hours = hours;
        }
        if let Ok(key) = std::env::var("API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        config
    }

    /// Create the upload directory if it does not exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.upload_dir)?;
        Ok(())
    }

    /// Whether API-key authentication is enabled.
    pub fn auth_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| DocextError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| DocextError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.max_file_size, 50 * 1024 * 1024);
        assert_eq!(config.retention_hours, 1);
        assert!(!config.auth_enabled());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ServiceConfig {
            upload_dir: PathBuf::from("/tmp/docext"),
            max_file_size: 1024,
            retention_hours: 2,
            api_key: Some("secret".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.upload_dir, config.upload_dir);
        assert_eq!(back.max_file_size, 1024);
        assert!(back.auth_enabled());
    }
}
