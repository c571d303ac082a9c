//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementation, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use track_bridge::traits::SpotifyApi;
//!
//! // In production code:
//! async fn pick<C: SpotifyApi>(client: &C, query: &str) {
//!     let candidates = client.search_tracks(query, 5).await?;
//! }
//!
//! // In tests:
//! struct MockSpotify { ... }
//! impl SpotifyApi for MockSpotify { ... }
//! ```

use async_trait::async_trait;

use crate::domain::{ApiError, Candidate, Playlist};
use crate::duplicates::PageFetcher;
use crate::spotify::SpotifyClient;

/// Catalog search plus playlist reads and writes.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Search the catalog; results keep the provider's relevance order.
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Candidate>, ApiError>;

    /// List the authenticated user's playlists.
    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError>;

    /// Fetch one page of entry URIs from a playlist.
    async fn playlist_page(
        &self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<String>, ApiError>;

    /// Append a track to a playlist.
    async fn add_to_playlist(&self, playlist_id: &str, uri: &str) -> Result<(), ApiError>;

    /// Check that the bearer token is still accepted.
    async fn verify_token(&self) -> Result<(), ApiError>;
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Candidate>, ApiError> {
        self.search_tracks(query, limit).await
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.list_playlists().await
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<String>, ApiError> {
        self.playlist_page(playlist_id, offset, limit).await
    }

    async fn add_to_playlist(&self, playlist_id: &str, uri: &str) -> Result<(), ApiError> {
        self.add_to_playlist(playlist_id, uri).await
    }

    async fn verify_token(&self) -> Result<(), ApiError> {
        self.verify_token().await
    }
}

/// Adapter that lets any catalog client serve as the page fetcher for the
/// duplicate scan.
pub struct PlaylistPages<'a, C: SpotifyApi>(pub &'a C);

#[async_trait]
impl<C: SpotifyApi> PageFetcher for PlaylistPages<'_, C> {
    async fn fetch_page(
        &self,
        target_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<String>, ApiError> {
        self.0.playlist_page(target_id, offset, limit).await
    }
}
