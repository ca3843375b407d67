//! Chorus Core
//!
//! Platform-agnostic core types and traits for the Chorus playback service.
//!
//! This crate provides the foundational building blocks shared by every
//! component of the system (tracklist controller, playback engine, backends,
//! API layer):
//! - **Domain Types**: [`Track`], [`TlTrack`], [`PlaybackState`]
//! - **Core Traits**: [`PlaybackCoordinator`]
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::{TlId, TlTrack, Track};
//!
//! // A backend resolved a URI into track metadata
//! let track = Track::new("file:///music/song.flac");
//!
//! // The tracklist pairs it with a queue identity
//! let tl_track = TlTrack::new(TlId::new(0), track);
//! assert_eq!(tl_track.track().uri, "file:///music/song.flac");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod traits;
pub mod types;

// Re-export commonly used types
pub use traits::PlaybackCoordinator;
pub use types::{PlaybackState, TlId, TlTrack, Track};
