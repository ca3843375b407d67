/// Queued-entry identity types
use crate::types::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracklist entry identifier
///
/// Issued by the tracklist when a track is queued. Unique and monotonically
/// increasing for the lifetime of the tracklist instance; never reused, even
/// after the entry is removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TlId(u64);

impl TlId {
    /// Create a tlid from its integer value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the integer value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A track queued for playback
///
/// Pairs a [`Track`] with the position-independent identity the tracklist
/// addresses it by. The pairing is immutable once created; positions change
/// when the queue is reordered, the tlid never does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TlTrack {
    tlid: TlId,
    track: Track,
}

impl TlTrack {
    /// Pair a track with its tracklist identity
    pub fn new(tlid: TlId, track: Track) -> Self {
        Self { tlid, track }
    }

    /// The entry's tracklist identifier
    pub fn tlid(&self) -> TlId {
        self.tlid
    }

    /// The wrapped track
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Consume the entry, yielding the wrapped track
    pub fn into_track(self) -> Track {
        self.track
    }
}
