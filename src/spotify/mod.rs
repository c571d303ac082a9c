//! Spotify Web API integration
//!
//! Catalog search plus playlist reads and writes, performed with a bearer
//! token supplied by the caller (the OAuth flow itself lives in the host
//! application, not here).
//!
//! API docs: https://developer.spotify.com/documentation/web-api

pub mod dto;
mod adapter;
mod client;

pub use client::SpotifyClient;
