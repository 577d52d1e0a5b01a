use crate::{
    config,
    spotify::request,
    types::RecommendationsResponse,
    utils::RecommendationFilter,
};

/// Retrieves recommended track ids for the given filter.
///
/// The filter enumerates the recognized parameters — seed artists,
/// genres and tracks plus per-feature min/max/target bounds — and is
/// rendered into query parameters right before the call; nothing else
/// reaches the wire.
///
/// # Errors
///
/// Returns `reqwest::Error` on network failure or when the API rejects
/// the seed combination.
pub async fn get_recommendations(
    token: &str,
    filter: &RecommendationFilter,
) -> Result<Vec<String>, reqwest::Error> {
    let url = format!("{uri}/recommendations", uri = &config::spotify_apiurl());

    let mut params = filter.query_params();
    params.push(("market".to_string(), config::spotify_market()));

    let response: RecommendationsResponse = request::get_with_query(token, &url, &params).await?;

    Ok(response
        .tracks
        .into_iter()
        .filter_map(|track| track.id)
        .collect())
}
