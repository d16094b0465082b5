//! Notification domain module

mod request;

pub use request::{NotificationRequest, Toast, DEFAULT_MESSAGE};
