//! macOS playback through afplay

use async_trait::async_trait;

use crate::application::ports::{CommandRunner, SoundError, SoundPlayer};
use crate::domain::dispatch::Delivery;
use crate::domain::sound::SoundRequest;

use super::playback_error;

const AFPLAY: &str = "afplay";

/// Plays a file with `afplay`, a single attempt
pub struct AfplayPlayer<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> AfplayPlayer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `-v` is only passed when the volume is below 100
    fn args(request: &SoundRequest) -> Vec<String> {
        let mut args = Vec::with_capacity(3);
        if request.is_attenuated() {
            args.push("-v".to_string());
            args.push(request.volume_fraction().to_string());
        }
        args.push(request.path.to_string_lossy().into_owned());
        args
    }
}

#[async_trait]
impl<R: CommandRunner> SoundPlayer for AfplayPlayer<R> {
    async fn play(&self, request: &SoundRequest) -> Result<Delivery, SoundError> {
        self.runner
            .run(AFPLAY, &Self::args(request))
            .await
            .map_err(|e| playback_error(AFPLAY, e))?;
        Ok(Delivery::via(AFPLAY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sound::test_support::ScriptedRunner;

    #[test]
    fn args_include_volume_when_attenuated() {
        let request = SoundRequest::new("/s/done.mp3", 80);
        assert_eq!(AfplayPlayer::<ScriptedRunner>::args(&request), vec!["-v", "0.8", "/s/done.mp3"]);
    }

    #[test]
    fn args_omit_volume_at_full() {
        let request = SoundRequest::new("/s/done.mp3", 100);
        assert_eq!(AfplayPlayer::<ScriptedRunner>::args(&request), vec!["/s/done.mp3"]);
    }

    #[test]
    fn args_keep_zero_volume() {
        let request = SoundRequest::new("/s/done.mp3", 0);
        assert_eq!(AfplayPlayer::<ScriptedRunner>::args(&request), vec!["-v", "0", "/s/done.mp3"]);
    }

    #[tokio::test]
    async fn play_runs_afplay_once() {
        let runner = ScriptedRunner::new(&["afplay"], &[]);
        let player = AfplayPlayer::new(runner.clone());

        let delivery = player.play(&SoundRequest::new("/s/a.wav", 50)).await.unwrap();

        assert_eq!(delivery.mechanism, "afplay");
        assert_eq!(runner.runs(), vec!["afplay"]);
    }

    #[tokio::test]
    async fn play_failure_is_reported() {
        let runner = ScriptedRunner::new(&["afplay"], &["afplay"]);
        let player = AfplayPlayer::new(runner.clone());

        let err = player.play(&SoundRequest::new("/s/a.wav", 50)).await.unwrap_err();

        assert!(matches!(err, SoundError::PlaybackFailed { ref player, .. } if player == "afplay"));
        assert_eq!(runner.runs().len(), 1);
    }
}
