//! Windows playback through PresentationCore's MediaPlayer

use async_trait::async_trait;

use crate::application::ports::{CommandRunner, SoundError, SoundPlayer};
use crate::domain::dispatch::Delivery;
use crate::domain::sound::SoundRequest;
use crate::infrastructure::powershell::{command_args, MediaPlayerScript, POWERSHELL};

use super::playback_error;

/// Plays a file through a hidden PowerShell MediaPlayer, a single attempt
pub struct MediaPlayerSoundPlayer<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> MediaPlayerSoundPlayer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: CommandRunner> SoundPlayer for MediaPlayerSoundPlayer<R> {
    async fn play(&self, request: &SoundRequest) -> Result<Delivery, SoundError> {
        let script = MediaPlayerScript::new(&request.path, request.volume_fraction()).build();
        self.runner
            .run(POWERSHELL, &command_args(&script, false))
            .await
            .map_err(|e| playback_error(POWERSHELL, e))?;
        Ok(Delivery::via("powershell-mediaplayer"))
    }
}
