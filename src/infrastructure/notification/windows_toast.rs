//! Native Windows toast through a PowerShell WinRT script

use async_trait::async_trait;

use crate::application::ports::{CommandRunner, NotificationError, Notifier};
use crate::domain::dispatch::Delivery;
use crate::domain::notification::Toast;
use crate::infrastructure::powershell::{command_args, ToastScript, POWERSHELL};

/// Shows a ToastText02 toast via `powershell -ExecutionPolicy Bypass`
pub struct WindowsToastNotifier<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> WindowsToastNotifier<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: CommandRunner> Notifier for WindowsToastNotifier<R> {
    async fn notify(&self, toast: &Toast) -> Result<Delivery, NotificationError> {
        log::info!(
            "Sending Windows toast: title={:?} message_length={}",
            toast.title,
            toast.body.len()
        );

        let script = ToastScript::new(toast).build();
        self.runner
            .run(POWERSHELL, &command_args(&script, true))
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        Ok(Delivery::via("windows-toast"))
    }
}
