//! Configuration for the tracklist controller

use serde::{Deserialize, Serialize};

/// Configuration for a tracklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracklistConfig {
    /// Maximum number of queued entries (default: 10 000)
    ///
    /// `add`/`append` calls that would push the queue past this bound fail
    /// before touching the sequence.
    pub max_length: usize,
}

impl Default for TracklistConfig {
    fn default() -> Self {
        Self { max_length: 10_000 }
    }
}
