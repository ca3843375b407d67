//! Shuffle support for the tracklist

use chorus_core::TlTrack;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Uniformly permute a run of queued entries in place
///
/// Fisher-Yates via [`SliceRandom::shuffle`]: every ordering of the slice is
/// equally likely, including the identity.
pub fn shuffle_entries(entries: &mut [TlTrack]) {
    let mut rng = thread_rng();
    entries.shuffle(&mut rng);
}
