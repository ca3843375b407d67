//! Chorus - Tracklist Management
//!
//! The play-queue controller for the Chorus playback service.
//!
//! This crate provides:
//! - The ordered play queue with position-independent entry identities (tlids)
//! - Monotonic change versioning (one bump per effective mutation)
//! - Criteria-based lookup, filtering and removal
//! - Bounded-range moves and uniform shuffling
//! - Change events for API/UI observers
//! - Synchronization with the playback engine (clearing or removing the
//!   playing entry stops playback)
//!
//! # Architecture
//!
//! `chorus-tracklist` is an in-process component with no I/O of its own:
//! - No dependency on audio decoding or output
//! - No dependency on backends resolving URIs into [`chorus_core::Track`]s
//! - No dependency on the network/API transport
//!
//! The playback engine is reached only through the
//! [`chorus_core::PlaybackCoordinator`] trait, so the controller can be driven
//! against the real engine or an in-memory double.
//!
//! # Example: Queue Management
//!
//! ```rust
//! use chorus_core::{PlaybackCoordinator, PlaybackState, TlTrack, Track};
//! use chorus_tracklist::{Criteria, Tracklist};
//!
//! // A coordinator for a session with no engine attached yet
//! struct NoPlayback;
//!
//! impl PlaybackCoordinator for NoPlayback {
//!     fn current_state(&self) -> PlaybackState {
//!         PlaybackState::Stopped
//!     }
//!
//!     fn current_tl_track(&self) -> Option<TlTrack> {
//!         None
//!     }
//!
//!     fn request_stop(&mut self) {}
//! }
//!
//! let mut tracklist = Tracklist::new(Box::new(NoPlayback));
//!
//! let added = tracklist.append(vec![
//!     Track::new("file:///music/a.flac"),
//!     Track::new("file:///music/b.flac"),
//! ])?;
//! assert_eq!(tracklist.length(), 2);
//! assert_eq!(tracklist.version(), 1);
//!
//! // Entries keep their identity across reordering
//! tracklist.move_range(0, 1, 1)?;
//! assert_eq!(tracklist.index(&added[0])?, 1);
//!
//! // Lookup by any combination of criteria
//! let entry = tracklist.get(&Criteria::new().with_uri("file:///music/a.flac"))?;
//! assert_eq!(entry.tlid(), added[0].tlid());
//! # Ok::<(), chorus_tracklist::TracklistError>(())
//! ```
//!
//! # Example: Observing Changes
//!
//! ```rust
//! # use chorus_core::{PlaybackCoordinator, PlaybackState, TlTrack, Track};
//! # use chorus_tracklist::{Tracklist, TracklistEvent};
//! # struct NoPlayback;
//! # impl PlaybackCoordinator for NoPlayback {
//! #     fn current_state(&self) -> PlaybackState { PlaybackState::Stopped }
//! #     fn current_tl_track(&self) -> Option<TlTrack> { None }
//! #     fn request_stop(&mut self) {}
//! # }
//! let mut tracklist = Tracklist::new(Box::new(NoPlayback));
//! tracklist.append(vec![Track::new("file:///music/a.flac")])?;
//!
//! let events = tracklist.take_events();
//! assert_eq!(
//!     events,
//!     vec![TracklistEvent::TracklistChanged { version: 1, length: 1 }]
//! );
//! # Ok::<(), chorus_tracklist::TracklistError>(())
//! ```

mod criteria;
mod error;
mod events;
mod shuffle;
mod tracklist;
pub mod types;

// Public exports
pub use criteria::Criteria;
pub use error::{Result, TracklistError};
pub use events::TracklistEvent;
pub use tracklist::Tracklist;
pub use types::TracklistConfig;
