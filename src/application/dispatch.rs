//! Task-completed dispatch use case
//!
//! Runs the notification and sound channels concurrently and turns every
//! result (success, skip, failure, timeout) into a [`DispatchOutcome`].
//! Nothing here returns an error.

use std::time::Duration;

use crate::domain::config::{NotificationSettings, SoundSettings};
use crate::domain::dispatch::{Channel, DispatchOutcome, DispatchReport};
use crate::domain::notification::NotificationRequest;
use crate::domain::sound::{SoundLibrary, SoundRequest};

use super::ports::{Notifier, SoundError, SoundPlayer};

/// Upper bound on waiting for the notification mechanism
pub const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration snapshot for one dispatch, loaded once by the caller
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub notification: NotificationSettings,
    pub sound: SoundSettings,
    pub library: SoundLibrary,
}

/// Dispatch use case for one "task completed" event
pub struct DispatchUseCase<N, S>
where
    N: Notifier,
    S: SoundPlayer,
{
    notifier: N,
    player: S,
    notify_timeout: Duration,
}

impl<N, S> DispatchUseCase<N, S>
where
    N: Notifier,
    S: SoundPlayer,
{
    /// Create a new use case instance
    pub fn new(notifier: N, player: S) -> Self {
        Self {
            notifier,
            player,
            notify_timeout: NOTIFY_TIMEOUT,
        }
    }

    /// Override the notification timeout
    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Show the desktop notification.
    ///
    /// Resolves within the notification timeout even if the mechanism
    /// hangs; the hung call is left running.
    pub async fn notify(
        &self,
        request: &NotificationRequest,
        settings: &NotificationSettings,
    ) -> DispatchOutcome {
        if !settings.enabled {
            log::info!("Notification disabled in config");
            return DispatchOutcome::skipped(Channel::Notify, "disabled in config");
        }

        let toast = request.compose(settings);
        log::debug!(
            "Sending notification: title={:?} message_len={}",
            toast.title,
            toast.body.len()
        );

        match tokio::time::timeout(self.notify_timeout, self.notifier.notify(&toast)).await {
            Ok(Ok(delivery)) => DispatchOutcome::delivered(Channel::Notify, delivery.mechanism),
            Ok(Err(e)) => DispatchOutcome::failed(Channel::Notify, e.to_string()),
            Err(_) => {
                log::warn!(
                    "Notification timed out after {}s",
                    self.notify_timeout.as_secs_f32()
                );
                DispatchOutcome::timed_out(Channel::Notify)
            }
        }
    }

    /// Play the configured sound, or `sound_override` when given.
    pub async fn play_sound(
        &self,
        sound_override: Option<&str>,
        settings: &SoundSettings,
        library: &SoundLibrary,
    ) -> DispatchOutcome {
        if !settings.enabled {
            log::info!("Sound disabled in config");
            return DispatchOutcome::skipped(Channel::Sound, "disabled in config");
        }

        let id = sound_override
            .filter(|s| !s.is_empty())
            .unwrap_or(settings.file.as_str());
        let path = library.resolve(id);

        if !path.is_file() {
            log::warn!("Sound file not found: {}", path.display());
            return DispatchOutcome::skipped(
                Channel::Sound,
                format!("sound file not found: {}", path.display()),
            );
        }

        let request = SoundRequest::new(path, settings.volume);
        log::debug!(
            "Playing sound {} at volume {}",
            request.path.display(),
            request.volume
        );

        match self.player.play(&request).await {
            Ok(delivery) => DispatchOutcome::delivered(Channel::Sound, delivery.mechanism),
            Err(SoundError::NoPlayerAvailable) => {
                DispatchOutcome::skipped(Channel::Sound, "no audio player available")
            }
            Err(e) => DispatchOutcome::failed(Channel::Sound, e.to_string()),
        }
    }

    /// Run both channels concurrently and wait for both to settle.
    pub async fn execute(
        &self,
        request: &NotificationRequest,
        sound_override: Option<&str>,
        settings: &DispatchSettings,
    ) -> DispatchReport {
        let (notify, sound) = tokio::join!(
            self.notify(request, &settings.notification),
            self.play_sound(sound_override, &settings.sound, &settings.library),
        );

        let report = DispatchReport { notify, sound };
        for outcome in report.outcomes() {
            if outcome.error_detail().is_some() {
                log::warn!("{}", outcome);
            } else {
                log::info!("{}", outcome);
            }
        }

        report
    }
}
