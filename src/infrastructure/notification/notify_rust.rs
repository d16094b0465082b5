//! Cross-platform notification adapter using notify-rust
//!
//! Used directly on macOS and Linux, and as the Windows fallback.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::dispatch::Delivery;
use crate::domain::notification::Toast;
use crate::infrastructure::powershell::TOAST_APP_ID;

/// How long the toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 5000;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
    /// Icon shown next to the toast, when present
    icon: Option<PathBuf>,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: TOAST_APP_ID.to_string(),
            icon: None,
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            icon: None,
        }
    }

    /// Attach an icon; paths that do not exist are ignored
    pub fn with_icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon.filter(|p| p.is_file());
        self
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, toast: &Toast) -> Result<Delivery, NotificationError> {
        let title = toast.title.clone();
        let body = toast.body.clone();
        let app_name = self.app_name.clone();
        let icon = self
            .icon
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .timeout(notify_rust::Timeout::Milliseconds(TOAST_TIMEOUT_MS));
            if let Some(ref icon) = icon {
                notification.icon(icon);
            }

            notification
                .show()
                .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

            Ok(Delivery::via("notify-rust"))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
