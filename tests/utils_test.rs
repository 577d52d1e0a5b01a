use serde_json::json;
use spallcli::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_pluck_resolves_nested_paths() {
    let payload = json!({
        "album": {
            "id": "abc123",
            "release_date": "2023-10-17"
        }
    });

    assert_eq!(
        pluck(&payload, &["album", "id"]).and_then(|v| v.as_str()),
        Some("abc123")
    );
    assert_eq!(
        pluck_str(&payload, &["album", "release_date"]),
        Some("2023-10-17".to_string())
    );
}

#[test]
fn test_pluck_returns_none_for_missing_keys() {
    let payload = json!({"album": {"id": "abc123"}});

    assert!(pluck(&payload, &["album", "name"]).is_none());
    assert!(pluck(&payload, &["artist"]).is_none());
    assert!(pluck(&payload, &["album", "id", "deeper"]).is_none());
}

#[test]
fn test_pluck_returns_none_for_null_values() {
    let payload = json!({"album": null, "name": null});

    // Null leaf
    assert!(pluck(&payload, &["name"]).is_none());

    // Null intermediate
    assert!(pluck(&payload, &["album", "id"]).is_none());
}

#[test]
fn test_pluck_typed_getters_reject_wrong_types() {
    let payload = json!({
        "name": 42,
        "popularity": "high",
        "explicit": "yes",
        "tempo": true
    });

    assert!(pluck_str(&payload, &["name"]).is_none());
    assert!(pluck_i64(&payload, &["popularity"]).is_none());
    assert!(pluck_bool(&payload, &["explicit"]).is_none());
    assert!(pluck_f64(&payload, &["tempo"]).is_none());
}

#[test]
fn test_pluck_typed_getters_extract_values() {
    let payload = json!({
        "name": "Song",
        "popularity": 73,
        "explicit": false,
        "tempo": 120.5
    });

    assert_eq!(pluck_str(&payload, &["name"]), Some("Song".to_string()));
    assert_eq!(pluck_i64(&payload, &["popularity"]), Some(73));
    assert_eq!(pluck_bool(&payload, &["explicit"]), Some(false));
    assert_eq!(pluck_f64(&payload, &["tempo"]), Some(120.5));

    // Integers are readable as floats
    assert_eq!(pluck_f64(&payload, &["popularity"]), Some(73.0));
}

#[test]
fn test_pluck_str_list() {
    let payload = json!({"genres": ["rock", "indie", 7, "pop"]});

    // Non-string elements are skipped
    assert_eq!(
        pluck_str_list(&payload, &["genres"]),
        Some(vec![
            "rock".to_string(),
            "indie".to_string(),
            "pop".to_string()
        ])
    );

    // Not an array at the path
    assert!(pluck_str_list(&payload, &["missing"]).is_none());
    let wrong = json!({"genres": "rock"});
    assert!(pluck_str_list(&wrong, &["genres"]).is_none());
}

#[test]
fn test_pluck_id_list() {
    let payload = json!({
        "artists": [
            {"id": "a1", "name": "First"},
            {"id": "a2", "name": "Second"},
            {"name": "No id"},
            {"id": null, "name": "Null id"}
        ]
    });

    // Elements without a string id are skipped
    assert_eq!(
        pluck_id_list(&payload, &["artists"]),
        Some(vec!["a1".to_string(), "a2".to_string()])
    );

    assert!(pluck_id_list(&payload, &["albums"]).is_none());
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("abc123"), "spotify:track:abc123");
}

#[test]
fn test_remove_duplicate_ids() {
    let mut ids = vec![
        "id1".to_string(),
        "id2".to_string(),
        "id1".to_string(),
        "id3".to_string(),
        "id2".to_string(),
    ];

    remove_duplicate_ids(&mut ids);

    // First occurrence of each id survives, order preserved
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_remove_duplicate_ids_across_sources() {
    // Liked songs [A, B] plus playlist tracks [B, C]
    let mut ids = vec![
        "A".to_string(),
        "B".to_string(),
        "B".to_string(),
        "C".to_string(),
    ];

    remove_duplicate_ids(&mut ids);

    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_audio_feature_display() {
    assert_eq!(AudioFeature::Energy.to_string(), "energy");
    assert_eq!(AudioFeature::TimeSignature.to_string(), "time_signature");
    assert_eq!(AudioFeature::Acousticness.to_string(), "acousticness");
}

#[test]
fn test_audio_feature_all_constant() {
    assert_eq!(AudioFeature::ALL.len(), 13);
    assert!(AudioFeature::ALL.contains(&AudioFeature::Danceability));
    assert!(AudioFeature::ALL.contains(&AudioFeature::Popularity));
    assert!(AudioFeature::ALL.contains(&AudioFeature::Valence));
}

#[test]
fn test_parse_feature_bound_valid_inputs() {
    let bound = parse_feature_bound("energy=0.8").unwrap();
    assert_eq!(bound.feature, AudioFeature::Energy);
    assert_eq!(bound.value, 0.8);

    // Hyphens and case are normalized
    let bound = parse_feature_bound("Time-Signature=4").unwrap();
    assert_eq!(bound.feature, AudioFeature::TimeSignature);
    assert_eq!(bound.value, 4.0);

    // Surrounding whitespace is tolerated
    let bound = parse_feature_bound(" tempo = 120.5 ").unwrap();
    assert_eq!(bound.feature, AudioFeature::Tempo);
    assert_eq!(bound.value, 120.5);
}

#[test]
fn test_parse_feature_bound_invalid_inputs() {
    // Empty input
    let result = parse_feature_bound("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Missing separator
    let result = parse_feature_bound("energy");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("expected <feature>=<value>"));

    // Unknown feature
    let result = parse_feature_bound("loud=0.5");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid feature 'loud'"));

    // Unparsable value
    let result = parse_feature_bound("energy=high");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'high'"));
}

#[test]
fn test_recommendation_filter_query_params() {
    let filter = RecommendationFilter {
        seed_artists: vec!["a1".to_string(), "a2".to_string()],
        seed_genres: vec!["rock".to_string()],
        seed_tracks: vec![],
        limit: Some(20),
        min: vec![FeatureBound {
            feature: AudioFeature::Energy,
            value: 0.5,
        }],
        max: vec![FeatureBound {
            feature: AudioFeature::Tempo,
            value: 140.0,
        }],
        target: vec![FeatureBound {
            feature: AudioFeature::Valence,
            value: 0.8,
        }],
    };

    let params = filter.query_params();

    assert!(params.contains(&("seed_artists".to_string(), "a1,a2".to_string())));
    assert!(params.contains(&("seed_genres".to_string(), "rock".to_string())));
    assert!(params.contains(&("limit".to_string(), "20".to_string())));
    assert!(params.contains(&("min_energy".to_string(), "0.5".to_string())));
    assert!(params.contains(&("max_tempo".to_string(), "140".to_string())));
    assert!(params.contains(&("target_valence".to_string(), "0.8".to_string())));

    // Empty seed lists do not produce parameters
    assert!(!params.iter().any(|(key, _)| key == "seed_tracks"));
}

#[test]
fn test_recommendation_filter_seed_count() {
    let mut filter = RecommendationFilter::default();
    assert_eq!(filter.seed_count(), 0);

    filter.seed_artists.push("a1".to_string());
    filter.seed_genres.push("rock".to_string());
    filter.seed_tracks.push("t1".to_string());
    assert_eq!(filter.seed_count(), 3);

    // An empty filter produces no query parameters at all
    assert!(RecommendationFilter::default().query_params().is_empty());
}
