//! # CLI Module
//!
//! This module provides the command-line interface layer for spallcli.
//! It implements all user-facing commands and coordinates between the
//! Spotify API layer, token management, and user interaction.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth 2.0 PKCE flow
//!
//! ### Lookups
//!
//! - [`track`] - Shows a track with its audio features
//! - [`album`] - Shows an album with its track ids
//! - [`artist`] - Shows an artist with discography and top tracks
//! - [`recommend`] - Queries track recommendations for a seed/bound filter
//!
//! ### Playlist Operations
//!
//! - [`playlists`] - Lists the user's playlists
//! - [`consolidate`] - Rebuilds the consolidated playlist from liked
//!   songs and all non-omitted playlists
//! - [`export`] - Renders every track of a playlist as a table
//!
//! ## Error Handling Philosophy
//!
//! Fatal conditions (no stored token, failed workflow phases) terminate
//! via the `error!` macro with a hint on how to recover; partial
//! per-item failures during exports produce a `warning!` and the
//! remaining items are still processed. Long-running operations show a
//! spinner or progress bar while network requests are in flight.

mod auth;
mod consolidate;
mod export;
mod lookup;
mod playlists;
mod recommend;

pub use auth::auth;
pub use consolidate::consolidate;
pub use export::export;
pub use lookup::album;
pub use lookup::artist;
pub use lookup::track;
pub use playlists::playlists;
pub use recommend::recommend;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::TokenManager};

/// Loads the stored token and returns a valid bearer token, refreshing
/// it if necessary. Terminates with a hint to run `spallcli auth` when
/// no token is stored.
pub(crate) async fn require_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spallcli auth\n Error: {}",
                e
            );
        }
    };

    token_mgr.get_valid_token().await
}

/// Creates the spinner shown while a network operation is in flight.
pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Formats an optional scalar for table output, `-` when missing.
pub(crate) fn fmt_value<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Formats an optional id list for table output, `-` when missing.
pub(crate) fn fmt_list(value: &Option<Vec<String>>) -> String {
    value
        .as_ref()
        .map(|v| v.join(", "))
        .unwrap_or_else(|| "-".to_string())
}
