//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod dispatch;
pub mod install;
pub mod ports;

// Re-export use cases
pub use dispatch::{DispatchSettings, DispatchUseCase, NOTIFY_TIMEOUT};
pub use install::{InstallReport, InstallStatus, InstallUseCase, UninstallReport};
