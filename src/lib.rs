//! Track Bridge - resolves scraped video metadata to streaming-catalog
//! tracks and saves them to playlists.
//!
//! Given the title and channel of a video someone is watching, this crate
//! decides which catalog track (if any) is the same song, checks whether the
//! target playlist already contains it, and performs the append. The OAuth
//! flow, page scraping and UI all live in the host application; this crate
//! only needs a bearer token and the scraped strings.
//!
//! # Architecture
//!
//! This crate follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **Matching core** (`matching/`) - Pure title normalization, scoring and resolution
//! - **Duplicate scan** (`duplicates.rs`) - Paginated membership check behind an injected fetcher
//! - **API DTOs** (`spotify/dto.rs`) - Exact API response shapes
//! - **Adapters** (`spotify/adapter.rs`) - Convert DTOs to domain models
//! - **Client** (`spotify/client.rs`) - HTTP client for the Spotify Web API
//! - **Service** (`service.rs`) - High-level orchestration of the save flow
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. The matching core is testable without a browser host or network
//! 3. We can swap providers without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use track_bridge::{SaveService, SourceDescriptor, SpotifyClient};
//!
//! let client = SpotifyClient::new(bearer_token);
//! let service = SaveService::new(client);
//!
//! let source = SourceDescriptor::new("Adele - Hello [Official Music Video]", "Adele");
//! let outcome = service.save_to_playlist(&source, playlist_id).await?;
//! ```

pub mod domain;
pub mod duplicates;
pub mod error;
pub mod matching;
pub mod service;
pub mod spotify;
pub mod traits;

pub use domain::{
    ApiError, Candidate, MatchReason, MatchResult, NormalizedTitle, Playlist, SaveOutcome,
    SourceDescriptor,
};
pub use duplicates::{DuplicateReport, PageFetcher, exists};
pub use error::{Error, Result};
pub use matching::{normalize, resolve};
pub use service::{SaveConfig, SaveService};
pub use spotify::SpotifyClient;
pub use traits::{PlaylistPages, SpotifyApi};
