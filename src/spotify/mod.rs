//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! spallcli: authentication, single-item lookups, paginated collection
//! of list endpoints, and playlist mutation. It abstracts HTTP requests
//! and the OAuth flow behind a small set of async functions, providing a
//! clean Rust interface for the CLI layer.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Lookups (Tracks, Albums, Artists, Recommendations)
//!     ├── Collection (offset pagination over list endpoints)
//!     └── Playlist Operations (Create, Add, Remove)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: browser launch, local callback,
//!   token exchange and persistence.
//! - [`request`] - One-round-trip HTTP helpers that attach the bearer
//!   credential and deserialize JSON bodies. Transport and status errors
//!   are propagated to the caller; there is no retry layer.
//! - [`paging`] - The offset-advancing page collector and the chunked
//!   mutation helper shared by every list and bulk-write operation.
//! - [`tracks`] - Track lookup with audio features, liked-songs listing.
//! - [`albums`] - Album lookup.
//! - [`artists`] - Artist lookup including discography and top tracks.
//! - [`playlists`] - Playlist listing, lookup by name, creation, and
//!   batched track addition/removal.
//! - [`recommend`] - Recommendation queries driven by an explicit
//!   filter structure.
//!
//! ## Error Handling
//!
//! All request functions return `Result` with `reqwest::Error`: network
//! failures and non-success statuses surface to the caller unretried.
//! Missing or malformed *fields* inside otherwise valid payloads are not
//! errors: single-item lookups build records through defensive path
//! extraction and mark absent values as `None`.
//!
//! ## API Coverage
//!
//! - `GET /tracks/{id}`, `GET /audio-features/{id}`
//! - `GET /albums/{id}`
//! - `GET /artists/{id}`, `GET /artists/{id}/albums`,
//!   `GET /artists/{id}/top-tracks`
//! - `GET /me/tracks`, `GET /me/playlists`, `GET /playlists/{id}/tracks`
//! - `GET /recommendations`
//! - `POST /users/{user}/playlists`, `POST /playlists/{id}/tracks`,
//!   `DELETE /playlists/{id}/tracks`
//! - `POST /api/token` (exchange and refresh)

pub mod albums;
pub mod artists;
pub mod auth;
pub mod paging;
pub mod playlists;
pub mod recommend;
pub mod request;
pub mod tracks;
