//! Assistant settings port interface

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error::HookSettingsError;

/// Port for the assistant's JSON settings document
#[async_trait]
pub trait HookSettingsStore: Send + Sync {
    /// Load the settings document.
    ///
    /// # Returns
    /// An empty object if the file is missing or unparseable
    async fn load(&self) -> Value;

    /// Write the settings document, creating parent directories.
    async fn save(&self, settings: &Value) -> Result<(), HookSettingsError>;

    /// Copy the current file aside.
    ///
    /// # Returns
    /// The backup path, or None if there was nothing to back up
    async fn backup(&self) -> Result<Option<PathBuf>, HookSettingsError>;

    /// Get the settings file path.
    fn path(&self) -> PathBuf;
}
