//! # API Module
//!
//! HTTP endpoints for the local callback server used during the OAuth
//! 2.0 PKCE flow. The server only exists while `spallcli auth` is
//! waiting for the user to grant access in their browser.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the authorization code from Spotify's
//!   authorization server and completes the PKCE token exchange.
//! - [`health`] - Returns application status and version, useful when
//!   checking that the callback server came up.
//!
//! Built on [Axum](https://docs.rs/axum); each endpoint is an async
//! function wired into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
