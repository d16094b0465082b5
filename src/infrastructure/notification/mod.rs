//! Notification infrastructure module
//!
//! notify-rust on macOS and Linux; on Windows a native PowerShell toast
//! with notify-rust as fallback.

mod fallback;
mod notify_rust;
mod windows_toast;

pub use fallback::FallbackNotifier;
pub use notify_rust::{NotifyRustNotifier, TOAST_TIMEOUT_MS};
pub use windows_toast::WindowsToastNotifier;

use std::path::PathBuf;

use crate::application::ports::{CommandRunner, Notifier};
use crate::domain::platform::Platform;

/// Create the notifier for `platform`
pub fn create_notifier<R>(platform: Platform, icon: Option<PathBuf>, runner: R) -> Box<dyn Notifier>
where
    R: CommandRunner + 'static,
{
    let native = NotifyRustNotifier::new().with_icon(icon);
    match platform {
        Platform::Windows => Box::new(FallbackNotifier::new(
            WindowsToastNotifier::new(runner),
            native,
        )),
        Platform::Mac | Platform::LinuxLike => Box::new(native),
    }
}
