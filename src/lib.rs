//! ccnotify - task-completion notifier for Claude Code
//!
//! Invoked as a `Stop` hook, it shows a desktop notification and plays a
//! sound concurrently, degrading through per-platform fallbacks without
//! ever failing the hook.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (config, platform, sound library, hook
//!   entries, dispatch outcomes) and errors
//! - **Application**: Dispatch and install use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, PowerShell,
//!   CLI audio players, JSON files, file logger)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
