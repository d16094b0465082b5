//! Notification request and composed toast value objects

use crate::domain::config::NotificationSettings;

/// Message used when the caller supplies none
pub const DEFAULT_MESSAGE: &str = "Task completed";

/// Caller-supplied notification fields for one invocation.
///
/// Every field is optional; gaps are filled from [`NotificationSettings`]
/// when the request is composed into a [`Toast`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: Option<String>,
    pub message: Option<String>,
    pub work_dir: Option<String>,
    pub time: Option<String>,
}

impl NotificationRequest {
    /// Create an empty request (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_work_dir(mut self, work_dir: impl Into<String>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Compose the final title and body.
    ///
    /// The work-dir and time lines are appended, in that order, only when
    /// the matching setting is enabled and a value was supplied.
    pub fn compose(&self, settings: &NotificationSettings) -> Toast {
        let title = non_empty(self.title.as_deref()).unwrap_or(&settings.title);
        let mut body = non_empty(self.message.as_deref())
            .unwrap_or(DEFAULT_MESSAGE)
            .to_string();

        if settings.show_work_dir {
            if let Some(work_dir) = non_empty(self.work_dir.as_deref()) {
                body.push('\n');
                body.push_str(work_dir);
            }
        }

        if settings.show_time {
            if let Some(time) = non_empty(self.time.as_deref()) {
                body.push('\n');
                body.push_str(time);
            }
        }

        Toast {
            title: title.to_string(),
            body,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Final text of a desktop notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
}
