use std::{collections::HashSet, fmt};

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use serde_json::Value;
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Walks a key path into a JSON payload without ever failing.
///
/// Returns `None` if any step of the path is absent, sits on a value of
/// the wrong shape, or resolves to null. Upstream payloads are not
/// contractually complete for every resource instance, so callers read
/// fields through this function instead of indexing directly.
pub fn pluck<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.get(*key)?;
    }
    if current.is_null() { None } else { Some(current) }
}

pub fn pluck_str(root: &Value, path: &[&str]) -> Option<String> {
    pluck(root, path)?.as_str().map(str::to_string)
}

pub fn pluck_i64(root: &Value, path: &[&str]) -> Option<i64> {
    pluck(root, path)?.as_i64()
}

pub fn pluck_f64(root: &Value, path: &[&str]) -> Option<f64> {
    pluck(root, path)?.as_f64()
}

pub fn pluck_bool(root: &Value, path: &[&str]) -> Option<bool> {
    pluck(root, path)?.as_bool()
}

/// Extracts a list of strings at `path`; non-string elements are skipped.
pub fn pluck_str_list(root: &Value, path: &[&str]) -> Option<Vec<String>> {
    let list = pluck(root, path)?.as_array()?;
    Some(
        list.iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}

/// Extracts the `id` of every object in the array at `path`.
///
/// Elements without a string id (e.g. local tracks) are skipped rather
/// than reported as an error.
pub fn pluck_id_list(root: &Value, path: &[&str]) -> Option<Vec<String>> {
    let list = pluck(root, path)?.as_array()?;
    Some(
        list.iter()
            .filter_map(|v| v.get("id")?.as_str().map(str::to_string))
            .collect(),
    )
}

pub fn track_uri(id: &str) -> String {
    format!("spotify:track:{}", id)
}

/// Drops repeated ids, keeping the first occurrence of each.
pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen_ids = HashSet::new();
    ids.retain(|id| seen_ids.insert(id.clone()));
}

/// An audio feature the recommendation endpoint accepts bounds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AudioFeature {
    Acousticness,
    Danceability,
    Energy,
    Instrumentalness,
    Key,
    Liveness,
    Loudness,
    Mode,
    Popularity,
    Speechiness,
    Tempo,
    TimeSignature,
    Valence,
}

impl AudioFeature {
    pub const ALL: [AudioFeature; 13] = [
        AudioFeature::Acousticness,
        AudioFeature::Danceability,
        AudioFeature::Energy,
        AudioFeature::Instrumentalness,
        AudioFeature::Key,
        AudioFeature::Liveness,
        AudioFeature::Loudness,
        AudioFeature::Mode,
        AudioFeature::Popularity,
        AudioFeature::Speechiness,
        AudioFeature::Tempo,
        AudioFeature::TimeSignature,
        AudioFeature::Valence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFeature::Acousticness => "acousticness",
            AudioFeature::Danceability => "danceability",
            AudioFeature::Energy => "energy",
            AudioFeature::Instrumentalness => "instrumentalness",
            AudioFeature::Key => "key",
            AudioFeature::Liveness => "liveness",
            AudioFeature::Loudness => "loudness",
            AudioFeature::Mode => "mode",
            AudioFeature::Popularity => "popularity",
            AudioFeature::Speechiness => "speechiness",
            AudioFeature::Tempo => "tempo",
            AudioFeature::TimeSignature => "time_signature",
            AudioFeature::Valence => "valence",
        }
    }
}

impl fmt::Display for AudioFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `feature=value` bound for the recommendation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBound {
    pub feature: AudioFeature,
    pub value: f64,
}

/// Parses a `feature=value` pair, e.g. `energy=0.8` or `time-signature=4`.
///
/// Used as a clap value parser for the `--min`, `--max` and `--target`
/// recommendation options.
pub fn parse_feature_bound(input: &str) -> Result<FeatureBound, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("feature bound cannot be empty".to_string());
    }

    let Some((name, value)) = trimmed.split_once('=') else {
        return Err(format!(
            "invalid bound '{}': expected <feature>=<value>",
            trimmed
        ));
    };

    let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
    let feature = AudioFeature::ALL
        .iter()
        .copied()
        .find(|f| f.as_str() == normalized)
        .ok_or_else(|| format!("invalid feature '{}'", name.trim()))?;

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid value '{}' for feature '{}'", value.trim(), name.trim()))?;

    Ok(FeatureBound { feature, value })
}

/// The recognized recommendation filters: seed lists plus per-feature
/// min/max/target bounds. An explicit structure rather than a free-form
/// parameter map, so unknown keys cannot reach the wire.
#[derive(Debug, Clone, Default)]
pub struct RecommendationFilter {
    pub seed_artists: Vec<String>,
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub limit: Option<u32>,
    pub min: Vec<FeatureBound>,
    pub max: Vec<FeatureBound>,
    pub target: Vec<FeatureBound>,
}

impl RecommendationFilter {
    pub fn seed_count(&self) -> usize {
        self.seed_artists.len() + self.seed_genres.len() + self.seed_tracks.len()
    }

    /// Renders the filter as query parameters in the shape the API
    /// documents: comma-joined seeds and `min_`/`max_`/`target_` prefixed
    /// feature bounds.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if !self.seed_artists.is_empty() {
            params.push(("seed_artists".to_string(), self.seed_artists.join(",")));
        }
        if !self.seed_genres.is_empty() {
            params.push(("seed_genres".to_string(), self.seed_genres.join(",")));
        }
        if !self.seed_tracks.is_empty() {
            params.push(("seed_tracks".to_string(), self.seed_tracks.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        for (prefix, bounds) in [
            ("min", &self.min),
            ("max", &self.max),
            ("target", &self.target),
        ] {
            for bound in bounds {
                params.push((format!("{}_{}", prefix, bound.feature), bound.value.to_string()));
            }
        }

        params
    }
}
