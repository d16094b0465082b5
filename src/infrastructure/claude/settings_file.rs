//! `~/.claude/settings.json`

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::fs;

use crate::application::ports::HookSettingsStore;
use crate::domain::error::HookSettingsError;

const SETTINGS_DIR: &str = ".claude";
const SETTINGS_FILE: &str = "settings.json";
const BACKUP_SUFFIX: &str = ".backup";

/// The assistant's user-level settings document
pub struct ClaudeSettingsFile {
    path: PathBuf,
}

impl ClaudeSettingsFile {
    /// Settings under the current user's home directory
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: home.join(SETTINGS_DIR).join(SETTINGS_FILE),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(BACKUP_SUFFIX);
        PathBuf::from(name)
    }
}

impl Default for ClaudeSettingsFile {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HookSettingsStore for ClaudeSettingsFile {
    async fn load(&self) -> Value {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                log::debug!("Settings not readable at {}: {}", self.path.display(), e);
                return json!({});
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring unparseable settings at {}: {}", self.path.display(), e);
                json!({})
            }
        }
    }

    async fn save(&self, settings: &Value) -> Result<(), HookSettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| HookSettingsError::WriteError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| HookSettingsError::WriteError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| HookSettingsError::WriteError(e.to_string()))
    }

    async fn backup(&self) -> Result<Option<PathBuf>, HookSettingsError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let backup = self.backup_path();
        fs::copy(&self.path, &backup)
            .await
            .map_err(|e| HookSettingsError::BackupError(e.to_string()))?;
        Ok(Some(backup))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
