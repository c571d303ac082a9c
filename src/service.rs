//! Save service - orchestrates the full "video to playlist" flow.
//!
//! This is the high-level API:
//! 1. Normalize the scraped title into a search query
//! 2. Search the catalog for candidates
//! 3. Resolve the best match
//! 4. Optionally scan the playlist for a duplicate
//! 5. Append the track (the write is skipped for duplicates, not an error)

use tracing::{debug, info, warn};

use crate::domain::{MatchResult, SaveOutcome, SourceDescriptor};
use crate::duplicates;
use crate::error::{Error, Result};
use crate::matching;
use crate::traits::{PlaylistPages, SpotifyApi};

/// Configuration for the save service
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// How many search results to consider per save
    pub search_limit: u32,
    /// Whether to scan the target playlist before writing
    pub skip_duplicates: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            search_limit: 5,
            skip_duplicates: true,
        }
    }
}

/// Service for saving a scraped video's audio track to a playlist.
pub struct SaveService<C: SpotifyApi> {
    config: SaveConfig,
    client: C,
}

impl<C: SpotifyApi> SaveService<C> {
    /// Create a service with default configuration.
    pub fn new(client: C) -> Self {
        Self {
            config: SaveConfig::default(),
            client,
        }
    }

    /// Create a service with explicit configuration.
    pub fn with_config(client: C, config: SaveConfig) -> Self {
        Self { config, client }
    }

    /// Search the catalog and resolve the best match for a source.
    ///
    /// Returns `MatchResult::NoMatch` only when the search itself came
    /// back empty; otherwise there is always at least a fallback guess.
    pub async fn search_and_resolve(&self, source: &SourceDescriptor) -> Result<MatchResult> {
        let normalized = matching::normalize(&source.title);
        debug!(query = %normalized.cleaned_text, "searching catalog");

        let candidates = self
            .client
            .search_tracks(&normalized.cleaned_text, self.config.search_limit)
            .await?;

        Ok(matching::resolve(&candidates, source))
    }

    /// Resolve the source to a track and append it to `playlist_id`.
    ///
    /// With `skip_duplicates` enabled, the playlist is scanned first and an
    /// already-present track yields [`SaveOutcome::DuplicateSkipped`]. A
    /// failed scan aborts the save - it is never treated as "not a
    /// duplicate".
    pub async fn save_to_playlist(
        &self,
        source: &SourceDescriptor,
        playlist_id: &str,
    ) -> Result<SaveOutcome> {
        let MatchResult::Matched { candidate, reason } = self.search_and_resolve(source).await?
        else {
            let normalized = matching::normalize(&source.title);
            warn!(title = %source.title, "catalog search returned no candidates");
            return Err(Error::TrackNotFound {
                query: normalized.cleaned_text,
            });
        };

        if self.config.skip_duplicates {
            let pages = PlaylistPages(&self.client);
            let report = duplicates::exists(&pages, playlist_id, &candidate.uri).await?;
            if report.found {
                info!(
                    track = %candidate.name,
                    playlist = playlist_id,
                    "track already in playlist, skipping write"
                );
                return Ok(SaveOutcome::DuplicateSkipped {
                    candidate,
                    pages_examined: report.pages_examined,
                });
            }
        }

        self.client
            .add_to_playlist(playlist_id, &candidate.uri)
            .await?;

        info!(
            track = %candidate.name,
            artist = %candidate.primary_artist,
            playlist = playlist_id,
            ?reason,
            "track added to playlist"
        );

        Ok(SaveOutcome::Added { candidate, reason })
    }

    /// List the user's playlists (for the host application's picker UI).
    pub async fn playlists(&self) -> Result<Vec<crate::domain::Playlist>> {
        Ok(self.client.list_playlists().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, Candidate, MatchReason};
    use crate::traits::mocks::MockSpotify;

    fn candidate(name: &str, artist: &str, uri: &str) -> Candidate {
        Candidate {
            id: format!("{uri}-id"),
            name: name.to_string(),
            primary_artist: artist.to_string(),
            uri: uri.to_string(),
        }
    }

    fn adele_source() -> SourceDescriptor {
        SourceDescriptor::new("Adele - Hello [Official Music Video]", "Adele")
    }

    #[test]
    fn test_default_config() {
        let config = SaveConfig::default();
        assert_eq!(config.search_limit, 5);
        assert!(config.skip_duplicates);
    }

    #[tokio::test]
    async fn test_save_adds_resolved_track() {
        let mock = MockSpotify::with_search_results(vec![
            candidate("Hello", "Adele", "u1"),
            candidate("Other", "Bob", "u2"),
        ]);
        let service = SaveService::new(mock);

        let outcome = service
            .save_to_playlist(&adele_source(), "pl1")
            .await
            .unwrap();

        let SaveOutcome::Added { candidate, reason } = outcome else {
            panic!("expected Added");
        };
        assert_eq!(candidate.uri, "u1");
        assert_eq!(reason, MatchReason::ChannelArtistOverlap);
        assert_eq!(service.client.added_uris(), vec!["u1".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_search_is_track_not_found() {
        let service = SaveService::new(MockSpotify::empty());

        let result = service.save_to_playlist(&adele_source(), "pl1").await;

        assert!(matches!(result, Err(Error::TrackNotFound { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_is_skipped_not_written() {
        let mock = MockSpotify {
            search_results: vec![candidate("Hello", "Adele", "u1")],
            playlist_entries: vec!["u1".to_string()],
            ..MockSpotify::empty()
        };
        let service = SaveService::new(mock);

        let outcome = service
            .save_to_playlist(&adele_source(), "pl1")
            .await
            .unwrap();

        assert!(matches!(outcome, SaveOutcome::DuplicateSkipped { .. }));
        assert!(service.client.added_uris().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_check_can_be_disabled() {
        let mock = MockSpotify {
            search_results: vec![candidate("Hello", "Adele", "u1")],
            playlist_entries: vec!["u1".to_string()],
            ..MockSpotify::empty()
        };
        let service = SaveService::with_config(
            mock,
            SaveConfig {
                skip_duplicates: false,
                ..SaveConfig::default()
            },
        );

        let outcome = service
            .save_to_playlist(&adele_source(), "pl1")
            .await
            .unwrap();

        assert!(matches!(outcome, SaveOutcome::Added { .. }));
        assert_eq!(service.client.added_uris(), vec!["u1".to_string()]);
    }

    #[tokio::test]
    async fn test_fallback_match_is_still_saved() {
        // Nothing passes the scorer; the top result is saved as a best guess
        // and the reason tells strict callers what happened
        let mock = MockSpotify::with_search_results(vec![
            candidate("Unrelated", "Nobody", "u1"),
            candidate("Also Unrelated", "Someone", "u2"),
        ]);
        let service = SaveService::new(mock);

        let outcome = service
            .save_to_playlist(
                &SourceDescriptor::new("Obscure Bootleg Title", "RandomUploads"),
                "pl1",
            )
            .await
            .unwrap();

        let SaveOutcome::Added { candidate, reason } = outcome else {
            panic!("expected Added");
        };
        assert_eq!(candidate.uri, "u1");
        assert_eq!(reason, MatchReason::FallbackFirst);
    }

    #[tokio::test]
    async fn test_api_failure_surfaces() {
        let service = SaveService::new(MockSpotify::with_error(ApiError::Unauthorized));

        let result = service.save_to_playlist(&adele_source(), "pl1").await;

        assert!(matches!(
            result,
            Err(Error::Api(ApiError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_playlists_passthrough() {
        let mock = MockSpotify {
            playlists: vec![crate::domain::Playlist {
                id: "pl1".to_string(),
                name: "Road Trip".to_string(),
                track_total: Some(73),
            }],
            ..MockSpotify::empty()
        };
        let service = SaveService::new(mock);

        let playlists = service.playlists().await.unwrap();
        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].name, "Road Trip");
    }
}
