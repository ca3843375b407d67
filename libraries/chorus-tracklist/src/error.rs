//! Error types for tracklist management

use thiserror::Error;

/// Tracklist errors
///
/// Every failure is detected before any mutation happens, so an error never
/// leaves the tracklist partially modified.
#[derive(Debug, Error)]
pub enum TracklistError {
    /// A position or range argument failed its precondition
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// Lookup or removal criteria matched nothing
    #[error("no tracklist entry matches {0}")]
    NotFound(String),

    /// Lookup criteria matched more than one entry
    #[error("multiple tracklist entries match {0}")]
    AmbiguousMatch(String),

    /// The tracklist is at its configured maximum length
    #[error("tracklist is limited to {0} entries")]
    Full(usize),
}

/// Result type for tracklist operations
pub type Result<T> = std::result::Result<T, TracklistError>;
