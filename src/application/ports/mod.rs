//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod hook_settings;
pub mod notifier;
pub mod process;
pub mod sound_player;

// Re-export common types
pub use config::ConfigStore;
pub use hook_settings::HookSettingsStore;
pub use notifier::{NotificationError, Notifier};
pub use process::{CommandError, CommandRunner};
pub use sound_player::{SoundError, SoundPlayer};
