/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Immutable metadata describing a playable item.
///
/// A track is produced by a backend resolving a URI; `uri` is the only field
/// guaranteed to be present, everything else is whatever the backend could
/// supply. Equality and hashing are structural over all fields, so two tracks
/// resolved from the same source compare equal even when queued twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// URI the track was resolved from
    pub uri: String,

    /// Track title
    pub name: Option<String>,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Genre
    pub genre: Option<String>,

    /// Track number in album
    pub track_number: Option<u32>,

    /// Release date as reported by the backend, e.g. "1977" or "1977-10-14"
    pub date: Option<String>,

    /// Track length in milliseconds
    pub length_ms: Option<u64>,

    /// Bitrate in kbit/s
    pub bitrate: Option<u32>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: None,
            artist: None,
            album: None,
            genre: None,
            track_number: None,
            date: None,
            length_ms: None,
            bitrate: None,
        }
    }

    /// Get the track length as a Duration
    pub fn length(&self) -> Option<Duration> {
        self.length_ms.map(Duration::from_millis)
    }

    /// Set the track length from a Duration
    pub fn set_length(&mut self, length: Duration) {
        self.length_ms = Some(length.as_millis() as u64);
    }
}
