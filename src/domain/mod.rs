//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! Apart from sound-file lookups this layer has no dependencies on
//! external systems.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod hooks;
pub mod notification;
pub mod platform;
pub mod sound;

// Re-export common types
pub use config::{AppConfig, NotificationSettings, SoundSettings};
pub use dispatch::{Channel, ChannelStatus, Delivery, DispatchOutcome, DispatchReport};
pub use error::*;
pub use notification::{NotificationRequest, Toast};
pub use platform::Platform;
pub use sound::{SoundLibrary, SoundRequest};
