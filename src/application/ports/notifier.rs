//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dispatch::Delivery;
use crate::domain::notification::Toast;

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Notification mechanism unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// # Arguments
    /// * `toast` - The composed title and body
    ///
    /// # Returns
    /// The mechanism that showed the toast, error otherwise
    async fn notify(&self, toast: &Toast) -> Result<Delivery, NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, toast: &Toast) -> Result<Delivery, NotificationError> {
        self.as_ref().notify(toast).await
    }
}
