//! Domain error types

use thiserror::Error;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// Error when reading or writing the assistant's settings file
#[derive(Debug, Clone, Error)]
pub enum HookSettingsError {
    #[error("Failed to read settings file: {0}")]
    ReadError(String),

    #[error("Failed to write settings file: {0}")]
    WriteError(String),

    #[error("Failed to back up settings file: {0}")]
    BackupError(String),

    #[error("Unexpected settings layout: {0}")]
    Malformed(String),
}

/// Error from install / uninstall
#[derive(Debug, Clone, Error)]
pub enum InstallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] HookSettingsError),

    #[error("Failed to locate the ccnotify executable: {0}")]
    ExecutableNotFound(String),
}
