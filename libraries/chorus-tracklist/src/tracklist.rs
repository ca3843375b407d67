//! Tracklist controller - the ordered play queue
//!
//! Owns the ordered sequence of queued entries, issues their identities, and
//! keeps the playback engine consistent with the queue.

use crate::criteria::Criteria;
use crate::error::{Result, TracklistError};
use crate::events::TracklistEvent;
use crate::shuffle::shuffle_entries;
use crate::types::TracklistConfig;
use chorus_core::{PlaybackCoordinator, TlId, TlTrack, Track};
use tracing::debug;

/// The play-queue controller
///
/// One tracklist exists per playback session. It owns:
/// - the ordered sequence of [`TlTrack`] entries (insertion order = play
///   order; the same track may be queued more than once, distinguished by
///   tlid),
/// - a monotonic `version` counter, bumped exactly once per effective
///   mutation,
/// - the tlid counter, strictly increasing, never reset.
///
/// Every read accessor returns a fresh snapshot; the internal sequence is
/// never handed out. Every mutating operation checks its preconditions before
/// touching the sequence, so a failed call leaves the tracklist, its version,
/// and playback untouched.
///
/// The tracklist is not internally synchronized. The owner serializes access
/// to it (one request at a time, e.g. behind a mutex), and the coordinator
/// calls issued during a mutation happen while that serialization is held.
pub struct Tracklist {
    config: TracklistConfig,
    playback: Box<dyn PlaybackCoordinator>,
    entries: Vec<TlTrack>,
    next_tlid: u64,
    version: u64,
    pending_events: Vec<TracklistEvent>,
}

impl Tracklist {
    /// Create a tracklist bound to the given playback coordinator
    pub fn new(playback: Box<dyn PlaybackCoordinator>) -> Self {
        Self::with_config(TracklistConfig::default(), playback)
    }

    /// Create a tracklist with explicit configuration
    pub fn with_config(config: TracklistConfig, playback: Box<dyn PlaybackCoordinator>) -> Self {
        Self {
            config,
            playback,
            entries: Vec::new(),
            next_tlid: 0,
            version: 0,
            pending_events: Vec::new(),
        }
    }

    /// The controller's configuration
    pub fn config(&self) -> &TracklistConfig {
        &self.config
    }

    // ===== Queries =====

    /// Number of queued entries
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Version counter
    ///
    /// Starts at 0 and increases by exactly one for every mutation that
    /// actually changes the sequence's contents or order.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Snapshot of the queued entries in play order
    ///
    /// Each call allocates a new container; mutating it never affects the
    /// controller or any other snapshot.
    pub fn tl_tracks(&self) -> Vec<TlTrack> {
        self.entries.clone()
    }

    /// Snapshot of the queued tracks in play order
    pub fn tracks(&self) -> Vec<Track> {
        self.entries.iter().map(|e| e.track().clone()).collect()
    }

    /// Current position of the given entry, matched by tlid
    ///
    /// # Errors
    /// [`TracklistError::NotFound`] if no entry with that tlid is queued.
    pub fn index(&self, tl_track: &TlTrack) -> Result<usize> {
        self.position_of(tl_track.tlid())
            .ok_or_else(|| TracklistError::NotFound(format!("tlid={}", tl_track.tlid())))
    }

    /// Entries whose positions fall within `start..end`
    ///
    /// Bounds are clamped to the queue, never erroring; a fully out-of-range
    /// request returns an empty snapshot.
    pub fn slice(&self, start: usize, end: usize) -> Vec<TlTrack> {
        let end = end.min(self.entries.len());
        let start = start.min(end);
        self.entries[start..end].to_vec()
    }

    /// All entries matching the criteria, in play order
    pub fn filter(&self, criteria: &Criteria) -> Vec<TlTrack> {
        self.entries
            .iter()
            .filter(|e| criteria.matches(e))
            .cloned()
            .collect()
    }

    /// The single entry matching the criteria
    ///
    /// # Errors
    /// [`TracklistError::NotFound`] when nothing matches,
    /// [`TracklistError::AmbiguousMatch`] when more than one entry does.
    /// Matching by tlid alone can never be ambiguous.
    pub fn get(&self, criteria: &Criteria) -> Result<TlTrack> {
        let mut matches = self.filter(criteria);
        match matches.len() {
            0 => Err(TracklistError::NotFound(criteria.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(TracklistError::AmbiguousMatch(criteria.to_string())),
        }
    }

    // ===== Mutations =====

    /// Insert a single track, appending when `position` is `None`
    ///
    /// Returns the created entry with its assigned tlid.
    ///
    /// # Errors
    /// [`TracklistError::PreconditionFailed`] if `position` is outside
    /// `0..=length`, [`TracklistError::Full`] at the configured bound.
    pub fn add(&mut self, track: Track, position: Option<usize>) -> Result<TlTrack> {
        let length = self.entries.len();
        let position = position.unwrap_or(length);
        if position > length {
            return Err(TracklistError::PreconditionFailed(format!(
                "position {position} is outside 0..={length}"
            )));
        }
        self.check_capacity(1)?;

        let tl_track = self.issue(track);
        self.entries.insert(position, tl_track.clone());
        debug!("added entry {} at position {position}", tl_track.tlid());
        self.mark_changed();
        Ok(tl_track)
    }

    /// Append a batch of tracks at the end
    ///
    /// An empty batch is a no-op: no version bump, no event, no playback
    /// interaction. A non-empty batch bumps the version exactly once,
    /// regardless of how many tracks it holds, and never disturbs whatever is
    /// already playing. Returns the created entries in queue order.
    ///
    /// # Errors
    /// [`TracklistError::Full`] if the batch would exceed the configured
    /// bound; nothing is added in that case.
    pub fn append(&mut self, tracks: Vec<Track>) -> Result<Vec<TlTrack>> {
        if tracks.is_empty() {
            return Ok(Vec::new());
        }
        self.check_capacity(tracks.len())?;

        let added: Vec<TlTrack> = tracks.into_iter().map(|t| self.issue(t)).collect();
        self.entries.extend(added.iter().cloned());
        debug!("appended {} entries", added.len());
        self.mark_changed();
        Ok(added)
    }

    /// Remove every queued entry
    ///
    /// A no-op on an empty queue. If the playback engine was playing one of
    /// the cleared entries, it is stopped before this returns.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let removed = self.entries.len();
        self.entries.clear();
        debug!("cleared {removed} entries");
        self.mark_changed();
    }

    /// Remove all entries matching the criteria
    ///
    /// Removes every match, bumps the version once, and returns the removed
    /// entries in their former queue order. Removing the entry that is
    /// currently playing stops playback before this returns.
    ///
    /// # Errors
    /// [`TracklistError::NotFound`] when nothing matches (including on an
    /// empty queue); the tracklist is left unchanged.
    pub fn remove(&mut self, criteria: &Criteria) -> Result<Vec<TlTrack>> {
        let matched = self.filter(criteria);
        if matched.is_empty() {
            return Err(TracklistError::NotFound(criteria.to_string()));
        }

        self.entries.retain(|e| !criteria.matches(e));
        debug!("removed {} entries matching {criteria}", matched.len());
        self.mark_changed();
        Ok(matched)
    }

    /// Relocate the block `start..end` so it begins at `to_position`
    ///
    /// `to_position` addresses an insertion point in the sequence with the
    /// block already removed, so it must lie in `0..=length - block_len`.
    /// The block's internal order and the relative order of all untouched
    /// entries are preserved.
    ///
    /// # Errors
    /// [`TracklistError::PreconditionFailed`] when the block is empty
    /// (`start >= end`), extends past the queue, or `to_position` is not a
    /// legal insertion point. Nothing moves on failure.
    pub fn move_range(&mut self, start: usize, end: usize, to_position: usize) -> Result<()> {
        let length = self.entries.len();
        if start >= end {
            return Err(TracklistError::PreconditionFailed(format!(
                "range {start}..{end} does not describe a non-empty block"
            )));
        }
        if end > length {
            return Err(TracklistError::PreconditionFailed(format!(
                "range {start}..{end} is outside the tracklist (length {length})"
            )));
        }
        let remaining = length - (end - start);
        if to_position > remaining {
            return Err(TracklistError::PreconditionFailed(format!(
                "target position {to_position} is outside 0..={remaining}"
            )));
        }

        let block: Vec<TlTrack> = self.entries.drain(start..end).collect();
        let tail = self.entries.split_off(to_position);
        self.entries.extend(block);
        self.entries.extend(tail);
        debug!("moved block {start}..{end} to position {to_position}");
        self.mark_changed();
        Ok(())
    }

    /// Randomly permute the entries within `start..end`
    ///
    /// `None` bounds default to the whole queue. Entries outside the range
    /// keep their positions. The permutation is uniform over all orderings of
    /// the sub-range, and a shuffle always counts as a mutation, even when the
    /// chosen permutation happens to be the identity.
    ///
    /// # Errors
    /// [`TracklistError::PreconditionFailed`] when `start > end` or
    /// `end > length`; the queue is left untouched.
    pub fn shuffle(&mut self, start: Option<usize>, end: Option<usize>) -> Result<()> {
        let length = self.entries.len();
        let start = start.unwrap_or(0);
        let end = end.unwrap_or(length);
        if start > end || end > length {
            return Err(TracklistError::PreconditionFailed(format!(
                "range {start}..{end} is not a valid shuffle range (length {length})"
            )));
        }

        shuffle_entries(&mut self.entries[start..end]);
        debug!("shuffled entries {start}..{end}");
        self.mark_changed();
        Ok(())
    }

    // ===== Events =====

    /// Drain buffered change events
    ///
    /// Returns every event emitted since the last drain, oldest first.
    pub fn take_events(&mut self) -> Vec<TracklistEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether undrained events are buffered
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn position_of(&self, tlid: TlId) -> Option<usize> {
        self.entries.iter().position(|e| e.tlid() == tlid)
    }

    /// Wrap a track with the next tlid. Identities are issued in insertion
    /// order and never reused, even after the entry is removed.
    fn issue(&mut self, track: Track) -> TlTrack {
        let tlid = TlId::new(self.next_tlid);
        self.next_tlid += 1;
        TlTrack::new(tlid, track)
    }

    fn check_capacity(&self, additional: usize) -> Result<()> {
        if self.entries.len() + additional > self.config.max_length {
            return Err(TracklistError::Full(self.config.max_length));
        }
        Ok(())
    }

    /// Record an effective mutation: bump the version, queue the change event
    /// and re-synchronize playback with the new sequence.
    fn mark_changed(&mut self) {
        self.version += 1;
        self.pending_events.push(TracklistEvent::TracklistChanged {
            version: self.version,
            length: self.entries.len(),
        });
        self.sync_with_playback();
    }

    /// Stop playback if the entry it is holding no longer exists in the
    /// queue. Mutations that cannot retire entries never trigger this.
    fn sync_with_playback(&mut self) {
        if let Some(current) = self.playback.current_tl_track() {
            if self.position_of(current.tlid()).is_none() {
                debug!(
                    "entry {} left the tracklist while loaded, stopping playback",
                    current.tlid()
                );
                self.playback.request_stop();
            }
        }
    }
}
