//! Sound playback request value object

use std::path::PathBuf;

/// A resolved sound file and the volume to play it at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundRequest {
    pub path: PathBuf,
    /// Volume in percent, 0..=100
    pub volume: u8,
}

impl SoundRequest {
    /// Create a request, clamping volume to 100
    pub fn new(path: impl Into<PathBuf>, volume: u8) -> Self {
        Self {
            path: path.into(),
            volume: volume.min(100),
        }
    }

    /// Volume as a fraction, e.g. 80 -> 0.8
    pub fn volume_fraction(&self) -> f64 {
        f64::from(self.volume) / 100.0
    }

    /// Whether the volume is below full scale
    pub fn is_attenuated(&self) -> bool {
        self.volume < 100
    }
}
