//! Per-channel dispatch outcome value objects

use std::fmt;

/// Output channel of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Notify,
    Sound,
}

impl Channel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Notify => "notify",
            Self::Sound => "sound",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confirmation from a mechanism that it produced the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Name of the mechanism, e.g. `paplay` or `notify-rust`
    pub mechanism: &'static str,
}

impl Delivery {
    pub const fn via(mechanism: &'static str) -> Self {
        Self { mechanism }
    }
}

/// How a channel settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelStatus {
    /// A mechanism reported success
    Delivered { mechanism: String },
    /// Nothing was attempted (disabled, missing file, no mechanism available)
    Skipped { reason: String },
    /// Every attempted mechanism failed
    Failed { detail: String },
    /// The mechanism did not settle within the timeout window
    TimedOut,
}

/// Result of one channel for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub channel: Channel,
    pub status: ChannelStatus,
}

impl DispatchOutcome {
    pub fn delivered(channel: Channel, mechanism: impl Into<String>) -> Self {
        Self {
            channel,
            status: ChannelStatus::Delivered {
                mechanism: mechanism.into(),
            },
        }
    }

    pub fn skipped(channel: Channel, reason: impl Into<String>) -> Self {
        Self {
            channel,
            status: ChannelStatus::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn failed(channel: Channel, detail: impl Into<String>) -> Self {
        Self {
            channel,
            status: ChannelStatus::Failed {
                detail: detail.into(),
            },
        }
    }

    pub fn timed_out(channel: Channel) -> Self {
        Self {
            channel,
            status: ChannelStatus::TimedOut,
        }
    }

    /// True only when a mechanism confirmed delivery
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ChannelStatus::Delivered { .. })
    }

    /// Error detail for failed or timed-out channels
    pub fn error_detail(&self) -> Option<String> {
        match &self.status {
            ChannelStatus::Failed { detail } => Some(detail.clone()),
            ChannelStatus::TimedOut => Some("timed out waiting for the mechanism".to_string()),
            ChannelStatus::Delivered { .. } | ChannelStatus::Skipped { .. } => None,
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ChannelStatus::Delivered { mechanism } => {
                write!(f, "{}: delivered via {}", self.channel, mechanism)
            }
            ChannelStatus::Skipped { reason } => write!(f, "{}: skipped ({})", self.channel, reason),
            ChannelStatus::Failed { detail } => write!(f, "{}: failed ({})", self.channel, detail),
            ChannelStatus::TimedOut => write!(f, "{}: timed out", self.channel),
        }
    }
}

/// Outcomes of both channels for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub notify: DispatchOutcome,
    pub sound: DispatchOutcome,
}

impl DispatchReport {
    pub fn outcomes(&self) -> [&DispatchOutcome; 2] {
        [&self.notify, &self.sound]
    }
}
