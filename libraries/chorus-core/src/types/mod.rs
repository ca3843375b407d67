//! Domain types shared across Chorus components

mod playback_state;
mod tl_track;
mod track;

pub use playback_state::PlaybackState;
pub use tl_track::{TlId, TlTrack};
pub use track::Track;
