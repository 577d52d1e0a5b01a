use serde_json::Value;

use crate::{
    config,
    spotify::{paging, request},
    types::{ArtistAlbumsResponse, ArtistRecord},
    utils,
};

// /artists/{id}/albums caps limit at 50
const ARTIST_ALBUMS_PAGE_SIZE: u32 = 50;

/// Retrieves a single artist together with their discography and top
/// tracks.
///
/// Combines `GET /artists/{id}` with a paginated walk over
/// `GET /artists/{id}/albums` and a `GET /artists/{id}/top-tracks`
/// lookup. Artist fields are extracted defensively into an
/// [`ArtistRecord`]; the album id list comes from the collector and is
/// complete even for artists with more than one page of releases.
///
/// # Errors
///
/// Returns `reqwest::Error` when any of the three requests fails.
pub async fn get_artist(token: &str, id: &str) -> Result<ArtistRecord, reqwest::Error> {
    let info_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );
    let info: Value = request::get(token, &info_url).await?;

    let albums = get_artist_albums(token, id).await?;

    let top_url = format!(
        "{uri}/artists/{id}/top-tracks?market={market}",
        uri = &config::spotify_apiurl(),
        id = id,
        market = &config::spotify_market()
    );
    let top: Value = request::get(token, &top_url).await?;

    Ok(build_artist_record(id, &info, albums, &top))
}

/// Builds a structurally complete [`ArtistRecord`]; never fails. The
/// follower count sits nested under `followers.total` and is `None`
/// whenever that path cannot be resolved.
pub fn build_artist_record(
    id: &str,
    info: &Value,
    albums: Vec<String>,
    top: &Value,
) -> ArtistRecord {
    ArtistRecord {
        id: id.to_string(),
        name: utils::pluck_str(info, &["name"]),
        followers: utils::pluck_i64(info, &["followers", "total"]),
        genres: utils::pluck_str_list(info, &["genres"]),
        popularity: utils::pluck_i64(info, &["popularity"]),
        albums,
        top_tracks: utils::pluck_id_list(top, &["tracks"]),
    }
}

/// Retrieves the ids of every release by an artist, paging through the
/// discography in steps of 50.
pub async fn get_artist_albums(token: &str, id: &str) -> Result<Vec<String>, reqwest::Error> {
    paging::collect_all(ARTIST_ALBUMS_PAGE_SIZE, |offset| {
        let url = format!(
            "{uri}/artists/{id}/albums?market={market}&limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            id = id,
            market = &config::spotify_market(),
            limit = ARTIST_ALBUMS_PAGE_SIZE,
            offset = offset
        );

        async move {
            let page: ArtistAlbumsResponse = request::get(token, &url).await?;
            Ok(page.items.into_iter().filter_map(|album| album.id).collect())
        }
    })
    .await
}
