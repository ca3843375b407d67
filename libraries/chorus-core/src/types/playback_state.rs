/// Playback state as observed by the rest of the system
use serde::{Deserialize, Serialize};

/// The playback engine's coarse state
///
/// The tracklist controller depends on exactly two facts from the playback
/// engine: this state, and which entry is currently loaded. Everything else
/// about the engine is its own business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No entry loaded
    #[default]
    Stopped,
    /// Currently playing
    Playing,
    /// Paused mid-entry
    Paused,
}

impl PlaybackState {
    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
