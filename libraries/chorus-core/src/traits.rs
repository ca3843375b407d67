/// Core traits for Chorus
use crate::types::{PlaybackState, TlTrack};

/// Seam between the tracklist controller and the playback engine
///
/// The controller consults the coordinator whenever a queue mutation may have
/// disturbed what is currently playing. All calls are synchronous from the
/// caller's perspective: they return only once the engine has answered or
/// committed the transition, and the caller holds its own guard for the whole
/// exchange.
///
/// Implementations are typically thin proxies onto the real engine; tests use
/// an in-memory double.
pub trait PlaybackCoordinator: Send {
    /// Current playback state
    fn current_state(&self) -> PlaybackState;

    /// The entry currently loaded into the engine, if any
    ///
    /// `Some` while playing or paused, `None` while stopped.
    fn current_tl_track(&self) -> Option<TlTrack>;

    /// Transition playback to [`PlaybackState::Stopped`]
    ///
    /// Returns once the transition is committed, so callers may rely on the
    /// engine reporting `Stopped` afterwards.
    fn request_stop(&mut self);
}
