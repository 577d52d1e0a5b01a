use crate::{
    cli::{require_token, spinner},
    error, spotify, success,
    utils::RecommendationFilter,
    warning,
};

/// Queries track recommendations for the given filter and prints one
/// track id per line, suitable for piping.
pub async fn recommend(filter: RecommendationFilter) {
    if filter.seed_count() == 0 {
        error!("At least one seed artist, genre or track is required.");
    }
    if filter.seed_count() > 5 {
        error!("Spotify accepts at most 5 seeds per request.");
    }

    let token = require_token().await;

    let pb = spinner("Fetching recommendations...".to_string());
    let result = spotify::recommend::get_recommendations(&token, &filter).await;
    pb.finish_and_clear();

    match result {
        Ok(tracks) => {
            success!("Found {} recommended tracks", tracks.len());
            for id in tracks {
                println!("{}", id);
            }
        }
        Err(e) => warning!("Failed to fetch recommendations: {}", e),
    }
}
