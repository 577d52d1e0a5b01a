use crate::{
    config,
    spotify::{paging, request},
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, Playlist, PlaylistTracksResponse,
        RemoveTracksRequest, TrackUri, UserPlaylistsResponse,
    },
    utils,
};

// /me/playlists caps limit at 50, /playlists/{id}/tracks at 100
const PLAYLISTS_PAGE_SIZE: u32 = 50;
const PLAYLIST_TRACKS_PAGE_SIZE: u32 = 100;

// per-call maximums of the write endpoints
const ADD_BATCH_SIZE: usize = 50;
const REMOVE_BATCH_SIZE: usize = 100;

/// Retrieves all of the user's playlists, paging through
/// `GET /me/playlists` in steps of 50.
pub async fn get_playlists(token: &str) -> Result<Vec<Playlist>, reqwest::Error> {
    paging::collect_all(PLAYLISTS_PAGE_SIZE, |offset| {
        let url = format!(
            "{uri}/me/playlists?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = PLAYLISTS_PAGE_SIZE,
            offset = offset
        );

        async move {
            let page: UserPlaylistsResponse = request::get(token, &url).await?;
            Ok(page.items)
        }
    })
    .await
}

/// Retrieves the ids of every track in a playlist, paging through
/// `GET /playlists/{id}/tracks` in steps of 100. Slots whose track or
/// track id is null (removed content, local tracks) are skipped.
pub async fn get_playlist_tracks(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<String>, reqwest::Error> {
    paging::collect_all(PLAYLIST_TRACKS_PAGE_SIZE, |offset| {
        let url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            limit = PLAYLIST_TRACKS_PAGE_SIZE,
            offset = offset
        );

        async move {
            let page: PlaylistTracksResponse = request::get(token, &url).await?;
            Ok(page
                .items
                .into_iter()
                .filter_map(|item| item.track.and_then(|t| t.id))
                .collect())
        }
    })
    .await
}

/// Looks up a playlist of the user by exact name.
pub async fn find_by_name(token: &str, name: &str) -> Result<Option<Playlist>, reqwest::Error> {
    let playlists = get_playlists(token).await?;
    Ok(playlists.into_iter().find(|p| p.name == name))
}

/// Creates a private playlist for the configured user.
pub async fn create(
    token: &str,
    name: &str,
    description: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let url = format!(
        "{uri}/users/{user}/playlists",
        uri = &config::spotify_apiurl(),
        user = &config::spotify_user()
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: false,
    };

    request::post(token, &url, &body).await
}

/// Returns the id of the playlist with the given name, creating it if it
/// does not exist yet. Re-running never creates a duplicate.
pub async fn ensure(token: &str, name: &str, description: &str) -> Result<String, reqwest::Error> {
    if let Some(existing) = find_by_name(token, name).await? {
        return Ok(existing.id);
    }

    let created = create(token, name, description).await?;
    Ok(created.id)
}

/// Adds tracks to a playlist in batches of at most 50.
///
/// Each batch is one `POST /playlists/{id}/tracks` call carrying the
/// comma-joined track URIs in the query string. A failing batch aborts
/// the remainder; batches already sent stay committed remotely.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<(), reqwest::Error> {
    paging::for_each_chunk(track_ids, ADD_BATCH_SIZE, |chunk| {
        let url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        );
        let uris = chunk
            .iter()
            .map(|id| utils::track_uri(id))
            .collect::<Vec<_>>()
            .join(",");

        async move { request::post_query(token, &url, &[("uris", uris)]).await }
    })
    .await
}

/// Removes tracks from a playlist in batches of at most 100.
///
/// Each batch is one `DELETE /playlists/{id}/tracks` call with the URIs
/// wrapped into the request body. Failure semantics match
/// [`add_tracks`]: chunk-granular, no rollback.
pub async fn remove_tracks(
    token: &str,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<(), reqwest::Error> {
    paging::for_each_chunk(track_ids, REMOVE_BATCH_SIZE, |chunk| {
        let url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = &config::spotify_apiurl(),
            id = playlist_id
        );
        let body = RemoveTracksRequest {
            tracks: chunk
                .iter()
                .map(|id| TrackUri {
                    uri: utils::track_uri(id),
                })
                .collect(),
        };

        async move { request::delete_with_body(token, &url, &body).await }
    })
    .await
}
