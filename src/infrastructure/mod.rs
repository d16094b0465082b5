//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with notify-rust, PowerShell, CLI audio players
//! and the filesystem.

pub mod assets;
pub mod claude;
pub mod config;
pub mod logging;
pub mod notification;
pub mod powershell;
pub mod process;
pub mod sound;

// Re-export adapters
pub use assets::Assets;
pub use claude::ClaudeSettingsFile;
pub use config::JsonConfigStore;
pub use logging::{init_logging, log_path};
pub use notification::{create_notifier, NotifyRustNotifier};
pub use process::SystemCommandRunner;
pub use sound::create_sound_player;
