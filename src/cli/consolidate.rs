use std::collections::HashSet;

use crate::{
    cli::{require_token, spinner},
    error, info, spotify, success, utils,
};

/// Rebuilds the consolidated playlist from liked songs and all playlists
/// not named in the omit list.
///
/// Four strictly sequential phases:
/// 1. Find the target playlist by name, creating it when missing.
/// 2. Remove everything currently in the target.
/// 3. Collect liked-song ids, then the ids of every other playlist whose
///    name is not omitted (the target itself is always omitted).
/// 4. Drop duplicate ids and add the remainder to the target.
///
/// Re-running with unchanged sources produces the same final track set.
/// A failure mid-way leaves the target partially updated: phases already
/// executed are committed remotely and there is no compensating cleanup,
/// so the recovery path is to simply run the command again.
pub async fn consolidate(name: String, omit: Vec<String>) {
    let token = require_token().await;

    // Phase 1: resolve or create the target
    let target_id = match spotify::playlists::ensure(
        &token,
        &name,
        "Every liked song and playlist track in one place.",
    )
    .await
    {
        Ok(id) => id,
        Err(e) => error!("Failed to resolve target playlist '{}': {}", name, e),
    };
    info!("Using target playlist '{}'", name);

    // Phase 2: clear the target so the rebuild is not additive
    let pb = spinner(format!("Collecting current tracks of '{}'...", name));
    let current = match spotify::playlists::get_playlist_tracks(&token, &target_id).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to read target playlist: {}", e);
        }
    };

    if !current.is_empty() {
        if let Err(e) = spotify::playlists::remove_tracks(&token, &target_id, &current).await {
            error!("Failed to clear target playlist: {}", e);
        }
        info!("Removed {} tracks from '{}'", current.len(), name);
    }

    // Phase 3: aggregate liked songs and all non-omitted playlists
    let mut omitted: HashSet<String> = omit.into_iter().collect();
    omitted.insert(name.clone());

    let pb = spinner("Collecting liked songs...".to_string());
    let mut track_ids = match spotify::tracks::get_saved_tracks(&token).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to collect liked songs: {}", e);
        }
    };
    info!("Collected {} liked songs", track_ids.len());

    let playlists = match spotify::playlists::get_playlists(&token).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to list playlists: {}", e),
    };

    for playlist in playlists {
        if playlist.id == target_id || omitted.contains(&playlist.name) {
            continue;
        }

        let pb = spinner(format!("Collecting tracks from '{}'...", playlist.name));
        match spotify::playlists::get_playlist_tracks(&token, &playlist.id).await {
            Ok(tracks) => {
                pb.finish_and_clear();
                info!("Collected {} tracks from '{}'", tracks.len(), playlist.name);
                track_ids.extend(tracks);
            }
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to collect tracks from '{}': {}", playlist.name, e);
            }
        }
    }

    // Phase 4: dedup and write
    utils::remove_duplicate_ids(&mut track_ids);
    info!("Adding {} unique tracks to '{}'", track_ids.len(), name);

    if let Err(e) = spotify::playlists::add_tracks(&token, &target_id, &track_ids).await {
        error!("Failed to add tracks to '{}': {}", name, e);
    }

    success!("Consolidated {} tracks into '{}'", track_ids.len(), name);
}
