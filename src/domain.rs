//! Internal domain models for track resolution and playlist saves.
//!
//! These types are OUR types - they don't change when the remote API changes.
//! All external API responses get converted into these types via adapters.

/// The scraped description of the source video.
///
/// Constructed once per user action from page-scrape data and discarded
/// after a single resolution pass. The resolver never mutates it.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Video title as scraped (may be noisy/unstructured)
    pub title: String,
    /// Channel name (imperfect proxy for the artist)
    pub channel: String,
    /// Video description, if available (unused by matching, may carry hints)
    pub description: Option<String>,
}

impl SourceDescriptor {
    pub fn new(title: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            channel: channel.into(),
            description: None,
        }
    }
}

/// A video title after noise stripping and delimiter decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle {
    /// Noise-stripped text, reordered to "song artist" when a split occurred.
    /// Doubles as the catalog search query.
    pub cleaned_text: String,
    /// Right side of a single " - " split, if one occurred
    pub song_guess: Option<String>,
    /// Left side of a single " - " split, if one occurred
    pub artist_guess: Option<String>,
}

/// One track returned by the remote catalog search.
///
/// Read-only snapshot supplied by the caller; the resolver never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Catalog-unique track id
    pub id: String,
    /// Track name
    pub name: String,
    /// First credited artist
    pub primary_artist: String,
    /// Opaque identifier used for playlist insertion
    pub uri: String,
}

/// Why a candidate was accepted as the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// Channel name and artist name contain each other (either direction)
    ChannelArtistOverlap,
    /// Cleaned title contains both the artist and the track name
    TitleContainsBoth,
    /// No candidate passed; the top search result was returned as a best guess
    FallbackFirst,
}

/// Outcome of resolving a source descriptor against a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Matched {
        candidate: Candidate,
        reason: MatchReason,
    },
    /// Only returned for an empty candidate list
    NoMatch,
}

impl MatchResult {
    /// The matched candidate, if any.
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Matched { candidate, .. } => Some(candidate),
            Self::NoMatch => None,
        }
    }

    /// True when the match was confirmed by a heuristic rather than fallback.
    pub fn is_confident(&self) -> bool {
        matches!(
            self,
            Self::Matched {
                reason: MatchReason::ChannelArtistOverlap | MatchReason::TitleContainsBoth,
                ..
            }
        )
    }
}

/// A playlist owned by the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    /// Number of tracks currently in the playlist, when the API reports it
    pub track_total: Option<u32>,
}

/// Outcome of a completed save operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The track was added to the playlist
    Added {
        candidate: Candidate,
        reason: MatchReason,
    },
    /// The track was already present; the write was skipped
    DuplicateSkipped {
        candidate: Candidate,
        /// Pages of the playlist examined before the duplicate was found
        pages_examined: usize,
    },
}

/// Errors surfaced by remote collaborators (catalog search, playlist reads
/// and writes). The resolution core itself is total and never fails.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Not authenticated - bearer token missing, invalid, or expired")]
    Unauthorized,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Resource not found")]
    NotFound,
}
