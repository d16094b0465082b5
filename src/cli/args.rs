//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// ccnotify - desktop notification and sound when a Claude Code task completes
#[derive(Parser, Debug)]
#[command(name = "ccnotify")]
#[command(version)]
#[command(about = "Desktop notification and sound when a Claude Code task completes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Notify that a task completed (invoked by the Stop hook)
    Run {
        /// Notification title
        #[arg(short = 't', long)]
        title: Option<String>,
        /// Notification message
        #[arg(short = 'm', long)]
        message: Option<String>,
    },
    /// Send a test notification and sound
    Test,
    /// Write the default config and register the Stop hook
    Install {
        /// Only write the config, leave the hook settings alone
        #[arg(long)]
        skip_hooks: bool,
    },
    /// Remove the Stop hook and the config directory
    Uninstall {
        /// Keep the config directory
        #[arg(long)]
        keep_config: bool,
    },
    /// Show installation status
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List available sounds
    Sounds,
    /// Show the debug log
    Logs {
        /// Number of lines to show
        #[arg(short = 'n', long, default_value_t = 50)]
        lines: usize,
        /// Keep printing new lines as they are written
        #[arg(short = 'f', long, conflicts_with = "clear")]
        follow: bool,
        /// Delete the log file
        #[arg(short = 'c', long)]
        clear: bool,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "notification.enabled",
    "notification.title",
    "notification.show_work_dir",
    "notification.show_time",
    "sound.enabled",
    "sound.file",
    "sound.volume",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
