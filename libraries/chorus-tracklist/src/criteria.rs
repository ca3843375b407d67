//! Criteria-based lookup over queued entries

use chorus_core::{TlId, TlTrack};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter over queued entries
///
/// Every supplied field must match for an entry to match (logical AND);
/// fields left unset are ignored, so an empty criteria matches every entry.
/// A track missing one of its optional metadata fields never matches a
/// criteria that supplies that field.
///
/// `tlid` addresses the entry itself rather than its track; since tlids are
/// unique, a tlid criteria can match at most one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Match on entry identity
    pub tlid: Option<TlId>,

    /// Match on track URI
    pub uri: Option<String>,

    /// Match on track name
    pub name: Option<String>,

    /// Match on artist name
    pub artist: Option<String>,

    /// Match on album name
    pub album: Option<String>,
}

impl Criteria {
    /// Criteria with no fields supplied, matching every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a specific entry identity
    #[must_use]
    pub fn with_tlid(mut self, tlid: TlId) -> Self {
        self.tlid = Some(tlid);
        self
    }

    /// Require a specific track URI
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Require a specific track name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require a specific artist name
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Require a specific album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Whether the entry satisfies every supplied field
    pub fn matches(&self, tl_track: &TlTrack) -> bool {
        if let Some(tlid) = self.tlid {
            if tl_track.tlid() != tlid {
                return false;
            }
        }

        let track = tl_track.track();
        if let Some(uri) = &self.uri {
            if &track.uri != uri {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if track.name.as_deref() != Some(name.as_str()) {
                return false;
            }
        }
        if let Some(artist) = &self.artist {
            if track.artist.as_deref() != Some(artist.as_str()) {
                return false;
            }
        }
        if let Some(album) = &self.album {
            if track.album.as_deref() != Some(album.as_str()) {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(tlid) = self.tlid {
            parts.push(format!("tlid={tlid}"));
        }
        if let Some(uri) = &self.uri {
            parts.push(format!("uri=\"{uri}\""));
        }
        if let Some(name) = &self.name {
            parts.push(format!("name=\"{name}\""));
        }
        if let Some(artist) = &self.artist {
            parts.push(format!("artist=\"{artist}\""));
        }
        if let Some(album) = &self.album {
            parts.push(format!("album=\"{album}\""));
        }

        if parts.is_empty() {
            write!(f, "any entry")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::Track;

    fn entry(tlid: u64, track: Track) -> TlTrack {
        TlTrack::new(TlId::new(tlid), track)
    }

    #[test]
    fn empty_criteria_matches_everything() {
        let criteria = Criteria::new();
        assert!(criteria.matches(&entry(0, Track::new("file:///a.flac"))));
    }

    #[test]
    fn uri_criteria_matches_exactly() {
        let criteria = Criteria::new().with_uri("file:///a.flac");
        assert!(criteria.matches(&entry(0, Track::new("file:///a.flac"))));
        assert!(!criteria.matches(&entry(1, Track::new("file:///b.flac"))));
    }

    #[test]
    fn missing_field_never_matches() {
        let criteria = Criteria::new().with_name("Song");
        // Track has no name set at all
        assert!(!criteria.matches(&entry(0, Track::new("file:///a.flac"))));

        let named = Track {
            name: Some("Song".to_string()),
            ..Track::new("file:///a.flac")
        };
        assert!(criteria.matches(&entry(1, named)));
    }

    #[test]
    fn all_supplied_fields_must_match() {
        let track = Track {
            name: Some("x".to_string()),
            ..Track::new("a")
        };
        let criteria = Criteria::new().with_uri("a").with_name("x");
        assert!(criteria.matches(&entry(0, track.clone())));

        let criteria = Criteria::new().with_uri("b").with_name("x");
        assert!(!criteria.matches(&entry(0, track)));
    }

    #[test]
    fn tlid_criteria_matches_identity_not_track() {
        let track = Track::new("a");
        let criteria = Criteria::new().with_tlid(TlId::new(1));
        assert!(criteria.matches(&entry(1, track.clone())));
        assert!(!criteria.matches(&entry(2, track)));
    }

    #[test]
    fn artist_and_album_fields_participate() {
        let track = Track {
            artist: Some("Artist".to_string()),
            album: Some("Album".to_string()),
            ..Track::new("a")
        };
        let criteria = Criteria::new().with_artist("Artist").with_album("Album");
        assert!(criteria.matches(&entry(0, track)));
        assert!(!criteria.matches(&entry(1, Track::new("a"))));
    }

    #[test]
    fn display_renders_supplied_fields() {
        assert_eq!(Criteria::new().to_string(), "any entry");
        assert_eq!(
            Criteria::new().with_uri("a").with_name("x").to_string(),
            "uri=\"a\", name=\"x\""
        );
        assert_eq!(
            Criteria::new().with_tlid(TlId::new(5)).to_string(),
            "tlid=5"
        );
    }
}
