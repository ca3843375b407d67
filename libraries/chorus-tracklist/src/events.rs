//! Tracklist events
//!
//! Change notifications for observers of the play queue (API layer, UI
//! frontends). The controller buffers events as mutations land; callers drain
//! them with [`crate::Tracklist::take_events`].

use serde::{Deserialize, Serialize};

/// Events emitted by the tracklist controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TracklistEvent {
    /// The sequence's contents or order changed
    ///
    /// Emitted exactly once per effective mutation; no-ops (empty appends,
    /// clearing an already-empty queue, failed operations) emit nothing.
    TracklistChanged {
        /// Version after the change
        version: u64,
        /// Number of queued entries after the change
        length: usize,
    },
}
