use serde_json::Value;

use crate::{
    config,
    spotify::{paging, request},
    types::{SavedTracksResponse, TrackRecord},
    utils,
};

// /me/tracks caps limit at 50
const SAVED_TRACKS_PAGE_SIZE: u32 = 50;

/// Retrieves a single track together with its audio features.
///
/// Issues two lookups, `GET /tracks/{id}` and `GET /audio-features/{id}`,
/// and builds a [`TrackRecord`] from both payloads. Every field of the
/// record is read defensively: a field the upstream payload lacks (local
/// tracks, unreleased tracks without audio analysis) comes back as
/// `None` instead of an error.
///
/// # Errors
///
/// Returns `reqwest::Error` when either request itself fails; a missing
/// field inside a successful response is not an error.
pub async fn get_track(token: &str, id: &str) -> Result<TrackRecord, reqwest::Error> {
    let info_url = format!(
        "{uri}/tracks/{id}?market={market}",
        uri = &config::spotify_apiurl(),
        id = id,
        market = &config::spotify_market()
    );
    let info: Value = request::get(token, &info_url).await?;

    let features_url = format!(
        "{uri}/audio-features/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );
    let features: Value = request::get(token, &features_url).await?;

    Ok(build_track_record(id, &info, &features))
}

/// Builds a structurally complete [`TrackRecord`] from the raw track and
/// audio-features payloads. Never fails; extraction failures at any
/// depth become `None` for that field only.
pub fn build_track_record(id: &str, info: &Value, features: &Value) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        name: utils::pluck_str(info, &["name"]),
        artists: utils::pluck_id_list(info, &["artists"]),
        album: utils::pluck_str(info, &["album", "id"]),
        release_date: utils::pluck_str(info, &["album", "release_date"]),
        explicit: utils::pluck_bool(info, &["explicit"]),
        popularity: utils::pluck_i64(info, &["popularity"]),
        danceability: utils::pluck_f64(features, &["danceability"]),
        energy: utils::pluck_f64(features, &["energy"]),
        key: utils::pluck_i64(features, &["key"]),
        loudness: utils::pluck_f64(features, &["loudness"]),
        mode: utils::pluck_i64(features, &["mode"]),
        speechiness: utils::pluck_f64(features, &["speechiness"]),
        acousticness: utils::pluck_f64(features, &["acousticness"]),
        instrumentalness: utils::pluck_f64(features, &["instrumentalness"]),
        liveness: utils::pluck_f64(features, &["liveness"]),
        valence: utils::pluck_f64(features, &["valence"]),
        tempo: utils::pluck_f64(features, &["tempo"]),
        time_signature: utils::pluck_i64(features, &["time_signature"]),
        duration_ms: utils::pluck_i64(features, &["duration_ms"]),
    }
}

/// Retrieves the ids of every track the user has liked.
///
/// Pages through `GET /me/tracks` in steps of 50 until an empty page is
/// returned, concatenating ids in server order. Entries whose track or
/// track id is null are skipped.
pub async fn get_saved_tracks(token: &str) -> Result<Vec<String>, reqwest::Error> {
    paging::collect_all(SAVED_TRACKS_PAGE_SIZE, |offset| {
        let url = format!(
            "{uri}/me/tracks?market={market}&limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            market = &config::spotify_market(),
            limit = SAVED_TRACKS_PAGE_SIZE,
            offset = offset
        );

        async move {
            let page: SavedTracksResponse = request::get(token, &url).await?;
            Ok(page
                .items
                .into_iter()
                .filter_map(|item| item.track.and_then(|t| t.id))
                .collect())
        }
    })
    .await
}
