//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if Spotify changes their response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::domain::{Candidate, Playlist};

/// Convert a search response into ordered candidates.
///
/// Ordering is the provider's own relevance ranking and is preserved.
/// Tracks without any credited artist cannot be scored and are dropped.
pub fn to_candidates(response: dto::SearchResponse) -> Vec<Candidate> {
    response
        .tracks
        .items
        .into_iter()
        .filter_map(|track| {
            let primary_artist = track.artists.first().map(|a| a.name.clone())?;
            Some(Candidate {
                id: track.id,
                name: track.name,
                primary_artist,
                uri: track.uri,
            })
        })
        .collect()
}

/// Convert a playlists response, dropping null or malformed entries.
pub fn to_playlists(response: dto::PlaylistsResponse) -> Vec<Playlist> {
    response
        .items
        .into_iter()
        .flatten()
        .filter(|p| !p.id.is_empty() && !p.name.is_empty())
        .map(|p| Playlist {
            track_total: p.tracks.and_then(|t| t.total),
            id: p.id,
            name: p.name,
        })
        .collect()
}

/// Extract the entry URIs from one page of a playlist listing.
///
/// Entries whose track is null (removed from the catalog) are skipped.
pub fn to_entry_uris(response: dto::PlaylistItemsResponse) -> Vec<String> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.track.map(|t| t.uri))
        .collect()
}
