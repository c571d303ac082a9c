//! Spotify HTTP client
//!
//! Handles communication with the Spotify Web API using a caller-supplied
//! bearer token. 401 responses surface as [`ApiError::Unauthorized`] so the
//! host application can drop its stored token and re-authenticate, matching
//! how the API signals expiry.

use super::{adapter, dto};
use crate::domain::{ApiError, Candidate, Playlist};

/// Spotify Web API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl SpotifyClient {
    /// Create a new client with the given bearer token.
    ///
    /// The client is configured to:
    /// - Accept gzip-compressed responses (reduces bandwidth)
    /// - Send User-Agent header identifying the application
    pub fn new(token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.spotify.com/v1".to_string(),
            token: token.into(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Search the catalog for tracks matching a free-text query.
    ///
    /// Results come back in the API's own relevance order, which the
    /// resolver depends on.
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Candidate>, ApiError> {
        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        let response = self.get(&url).await?;
        let parsed = Self::parse_json::<dto::SearchResponse>(response).await?;
        Ok(adapter::to_candidates(parsed))
    }

    /// List the authenticated user's playlists.
    pub async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        let url = format!("{}/me/playlists?limit=50", self.base_url);

        let response = self.get(&url).await?;
        let parsed = Self::parse_json::<dto::PlaylistsResponse>(response).await?;
        Ok(adapter::to_playlists(parsed))
    }

    /// Fetch one page of entry URIs from a playlist.
    ///
    /// A page shorter than `limit` signals the end of the playlist.
    pub async fn playlist_page(
        &self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<String>, ApiError> {
        let url = format!(
            "{}/playlists/{}/tracks?limit={}&offset={}",
            self.base_url, playlist_id, limit, offset
        );

        let response = self.get(&url).await?;
        let parsed = Self::parse_json::<dto::PlaylistItemsResponse>(response).await?;
        Ok(adapter::to_entry_uris(parsed))
    }

    /// Append a track to a playlist.
    pub async fn add_to_playlist(&self, playlist_id: &str, uri: &str) -> Result<(), ApiError> {
        let url = format!("{}/playlists/{}/tracks", self.base_url, playlist_id);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "uris": [uri] }))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check_status(response).await?;
        // Body carries a snapshot id we have no use for; parse it anyway so
        // a contract change is noticed
        Self::parse_json::<dto::SnapshotResponse>(response).await?;
        Ok(())
    }

    /// Verify the bearer token is still accepted (GET /me).
    pub async fn verify_token(&self) -> Result<(), ApiError> {
        let url = format!("{}/me", self.base_url);
        self.get(&url).await?;
        Ok(())
    }

    /// Send a GET request and map the status to our error taxonomy.
    async fn get(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check_status(response).await
    }

    /// Map non-2xx statuses to [`ApiError`] variants.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status {
            reqwest::StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimited),
            _ => {
                // Try to surface the API's own error message
                if let Ok(body) = response.json::<dto::ApiErrorBody>().await {
                    return Err(ApiError::Api(body.error.message));
                }
                Err(ApiError::Network(format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown")
                )))
            }
        }
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SpotifyClient::new("token-abc");
        assert_eq!(client.base_url, "https://api.spotify.com/v1");
        assert_eq!(client.token, "token-abc");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = SpotifyClient::with_base_url("t", "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_search_query_is_encoded() {
        // The query goes through urlencoding before being placed in the URL
        let encoded = urlencoding::encode("Hello Adele & Friends");
        assert_eq!(encoded, "Hello%20Adele%20%26%20Friends");
    }
}
