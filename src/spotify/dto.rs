//! Spotify Web API Data Transfer Objects
//!
//! These types match EXACTLY what the Spotify API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api
//!
//! We use the /search, /me/playlists and /playlists/{id}/tracks endpoints.

use serde::{Deserialize, Serialize};

/// Response from `/search?type=track`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

/// Paged list of full track objects
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackObject>,
    /// Total results on the server (may exceed items.len())
    pub total: Option<u32>,
}

/// Full track object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackObject {
    /// Spotify track ID
    pub id: String,
    /// Track name
    pub name: String,
    /// Spotify URI (e.g. "spotify:track:...") used for playlist insertion
    pub uri: String,
    /// Credited artists, in credit order
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
}

/// Simplified artist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistObject {
    pub id: Option<String>,
    pub name: String,
}

/// Response from `/me/playlists`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistsResponse {
    /// Items may contain null entries for playlists the token cannot read
    #[serde(default)]
    pub items: Vec<Option<PlaylistObject>>,
}

/// Simplified playlist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistObject {
    pub id: String,
    pub name: String,
    /// Track count summary
    pub tracks: Option<PlaylistTracksRef>,
}

/// Track count reference inside a playlist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistTracksRef {
    pub total: Option<u32>,
}

/// Response from `/playlists/{id}/tracks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub total: Option<u32>,
}

/// One playlist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItem {
    /// Null for entries whose track has been removed from the catalog
    pub track: Option<PlaylistTrackRef>,
}

/// URI reference for a playlist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistTrackRef {
    pub uri: String,
}

/// Response from POST `/playlists/{id}/tracks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorObject,
}

/// Error detail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorObject {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "tracks": {
                "items": [{
                    "id": "4aebBr4JAihzJQR0CiIZJv",
                    "name": "Hello",
                    "uri": "spotify:track:4aebBr4JAihzJQR0CiIZJv",
                    "artists": [{
                        "id": "4dpARuHxo51G3z768sgnrY",
                        "name": "Adele"
                    }]
                }],
                "total": 412
            }
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(response.tracks.items.len(), 1);
        assert_eq!(response.tracks.total, Some(412));

        let track = &response.tracks.items[0];
        assert_eq!(track.name, "Hello");
        assert_eq!(track.uri, "spotify:track:4aebBr4JAihzJQR0CiIZJv");
        assert_eq!(track.artists[0].name, "Adele");
    }

    #[test]
    fn test_parse_track_without_artists() {
        let json = r#"{
            "id": "abc",
            "name": "Orphan Track",
            "uri": "spotify:track:abc"
        }"#;

        let track: TrackObject = serde_json::from_str(json).expect("Should parse bare track");
        assert!(track.artists.is_empty());
    }

    #[test]
    fn test_parse_playlists_with_null_item() {
        let json = r#"{
            "items": [
                {
                    "id": "pl1",
                    "name": "Road Trip",
                    "tracks": { "total": 73 }
                },
                null
            ]
        }"#;

        let response: PlaylistsResponse =
            serde_json::from_str(json).expect("Should parse playlists with null item");

        assert_eq!(response.items.len(), 2);
        let playlist = response.items[0].as_ref().unwrap();
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.tracks.as_ref().unwrap().total, Some(73));
        assert!(response.items[1].is_none());
    }

    #[test]
    fn test_parse_playlist_items() {
        let json = r#"{
            "items": [
                { "track": { "uri": "spotify:track:aaa" } },
                { "track": null }
            ],
            "total": 150
        }"#;

        let response: PlaylistItemsResponse =
            serde_json::from_str(json).expect("Should parse playlist items");

        assert_eq!(response.items.len(), 2);
        assert_eq!(
            response.items[0].track.as_ref().map(|t| t.uri.as_str()),
            Some("spotify:track:aaa")
        );
        assert!(response.items[1].track.is_none());
        assert_eq!(response.total, Some(150));
    }

    #[test]
    fn test_parse_snapshot_response() {
        let json = r#"{ "snapshot_id": "abc123" }"#;

        let response: SnapshotResponse =
            serde_json::from_str(json).expect("Should parse snapshot");
        assert_eq!(response.snapshot_id, "abc123");
    }

    #[test]
    fn test_parse_error_body() {
        let json = r#"{
            "error": { "status": 401, "message": "The access token expired" }
        }"#;

        let body: ApiErrorBody = serde_json::from_str(json).expect("Should parse error body");
        assert_eq!(body.error.status, 401);
        assert_eq!(body.error.message, "The access token expired");
    }
}
