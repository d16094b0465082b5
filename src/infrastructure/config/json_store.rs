//! JSON config store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "ccnotify";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// `<platform config dir>/ccnotify`
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(APP_DIR_NAME)
}

/// Config store backed by a pretty-printed JSON file
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    /// Create a new store with the platform default path
    pub fn new() -> Self {
        Self {
            path: config_dir().join(CONFIG_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse JSON content into AppConfig
    fn parse_json(content: &str) -> Result<AppConfig, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize AppConfig to JSON
    fn to_json(config: &AppConfig) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for JsonConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.exists() {
            return Ok(AppConfig::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::parse_json(&content)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let mut content = Self::to_json(config)?;
        content.push('\n');

        fs::write(&self.path, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.to_string_lossy().to_string(),
            ));
        }

        self.save(&AppConfig::defaults()).await
    }

    async fn remove_dir(&self) -> Result<bool, ConfigError> {
        let Some(dir) = self.path.parent() else {
            return Ok(false);
        };
        if !dir.exists() {
            return Ok(false);
        }

        fs::remove_dir_all(dir)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        Ok(true)
    }
}
