//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting and the
//! subcommand handlers.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod install_cmd;
pub mod logs_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{list_sounds, run_hook, run_test, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
