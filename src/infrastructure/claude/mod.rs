//! Assistant settings file adapter

mod settings_file;

pub use settings_file::ClaudeSettingsFile;
