//! Linux-like playback: try each installed player in order

use async_trait::async_trait;

use crate::application::ports::{CommandRunner, SoundError, SoundPlayer};
use crate::domain::dispatch::Delivery;
use crate::domain::sound::SoundRequest;

use super::playback_error;

/// A player binary and the flags it needs before the file path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCandidate {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl PlayerCandidate {
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }

    fn command_args(&self, request: &SoundRequest) -> Vec<String> {
        self.args
            .iter()
            .map(|a| (*a).to_string())
            .chain(std::iter::once(request.path.to_string_lossy().into_owned()))
            .collect()
    }
}

/// Default candidate order
pub const LINUX_CANDIDATES: &[PlayerCandidate] = &[
    PlayerCandidate::new("paplay", &[]),
    PlayerCandidate::new("aplay", &[]),
    PlayerCandidate::new("mpv", &["--no-video", "--really-quiet"]),
    PlayerCandidate::new("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
];

/// Checks each candidate, skips missing ones and stops at the first success.
///
/// Volume is not applied on this path.
pub struct FallbackChainPlayer<R: CommandRunner> {
    runner: R,
    candidates: &'static [PlayerCandidate],
}

impl<R: CommandRunner> FallbackChainPlayer<R> {
    pub fn new(runner: R) -> Self {
        Self::with_candidates(runner, LINUX_CANDIDATES)
    }

    pub fn with_candidates(runner: R, candidates: &'static [PlayerCandidate]) -> Self {
        Self { runner, candidates }
    }
}

#[async_trait]
impl<R: CommandRunner> SoundPlayer for FallbackChainPlayer<R> {
    async fn play(&self, request: &SoundRequest) -> Result<Delivery, SoundError> {
        let mut last_error = None;

        for candidate in self.candidates {
            if !self.runner.is_available(candidate.program).await {
                continue;
            }

            match self
                .runner
                .run(candidate.program, &candidate.command_args(request))
                .await
            {
                Ok(()) => return Ok(Delivery::via(candidate.program)),
                Err(e) => {
                    log::debug!("{} failed, trying next player: {}", candidate.program, e);
                    let error = playback_error(candidate.program, e);
                    // A player that ran and failed outranks one that vanished after the availability check
                    if last_error.is_none() || matches!(error, SoundError::PlaybackFailed { .. }) {
                        last_error = Some(error);
                    }
                }
            }
        }

        Err(last_error.unwrap_or(SoundError::NoPlayerAvailable))
    }
}
