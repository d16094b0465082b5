//! Sound playback port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dispatch::Delivery;
use crate::domain::sound::SoundRequest;

/// Errors that can occur during sound playback
#[derive(Error, Debug, Clone)]
pub enum SoundError {
    /// No candidate player exists on this system
    #[error("No audio player available")]
    NoPlayerAvailable,

    /// A player ran and failed
    #[error("{player} failed: {detail}")]
    PlaybackFailed { player: String, detail: String },
}

/// Port trait for sound file playback
#[async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Play a sound file to completion
    async fn play(&self, request: &SoundRequest) -> Result<Delivery, SoundError>;
}

/// Blanket implementation for boxed player types
#[async_trait]
impl SoundPlayer for Box<dyn SoundPlayer> {
    async fn play(&self, request: &SoundRequest) -> Result<Delivery, SoundError> {
        self.as_ref().play(request).await
    }
}
