//! Sound playback adapters
//!
//! One strategy per platform: afplay on macOS, a PowerShell MediaPlayer on
//! Windows and a check-and-fallback chain of CLI players elsewhere.

mod afplay;
mod fallback_chain;
mod media_player;

pub use afplay::AfplayPlayer;
pub use fallback_chain::{FallbackChainPlayer, PlayerCandidate, LINUX_CANDIDATES};
pub use media_player::MediaPlayerSoundPlayer;

use crate::application::ports::{CommandError, CommandRunner, SoundError, SoundPlayer};
use crate::domain::platform::Platform;

/// Create the sound player for `platform`
pub fn create_sound_player<R>(platform: Platform, runner: R) -> Box<dyn SoundPlayer>
where
    R: CommandRunner + 'static,
{
    match platform {
        Platform::Mac => Box::new(AfplayPlayer::new(runner)),
        Platform::Windows => Box::new(MediaPlayerSoundPlayer::new(runner)),
        Platform::LinuxLike => Box::new(FallbackChainPlayer::new(runner)),
    }
}

/// A missing binary means no player; anything else is a playback failure
fn playback_error(player: &str, error: CommandError) -> SoundError {
    match error {
        CommandError::NotFound(_) => SoundError::NoPlayerAvailable,
        CommandError::SpawnFailed { detail, .. } | CommandError::Failed { detail, .. } => {
            SoundError::PlaybackFailed {
                player: player.to_string(),
                detail,
            }
        }
    }
}
