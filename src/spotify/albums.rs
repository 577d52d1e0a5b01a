use serde_json::Value;

use crate::{config, spotify::request, types::AlbumRecord, utils};

/// Retrieves a single album.
///
/// Builds an [`AlbumRecord`] from `GET /albums/{id}`: name, artist ids,
/// the ids of the album's tracks and the release date. Fields absent
/// from the payload are `None`.
pub async fn get_album(token: &str, id: &str) -> Result<AlbumRecord, reqwest::Error> {
    let url = format!(
        "{uri}/albums/{id}?market={market}",
        uri = &config::spotify_apiurl(),
        id = id,
        market = &config::spotify_market()
    );
    let info: Value = request::get(token, &url).await?;

    Ok(build_album_record(id, &info))
}

/// Builds a structurally complete [`AlbumRecord`]; never fails.
pub fn build_album_record(id: &str, info: &Value) -> AlbumRecord {
    AlbumRecord {
        id: id.to_string(),
        name: utils::pluck_str(info, &["name"]),
        artists: utils::pluck_id_list(info, &["artists"]),
        tracks: utils::pluck_id_list(info, &["tracks", "items"]),
        release_date: utils::pluck_str(info, &["release_date"]),
    }
}
