use serde_json::{Value, json};
use spallcli::spotify::albums::build_album_record;
use spallcli::spotify::artists::build_artist_record;
use spallcli::spotify::tracks::build_track_record;

fn full_track_payload() -> Value {
    json!({
        "name": "Test Song",
        "artists": [{"id": "artist1"}, {"id": "artist2"}],
        "album": {
            "id": "album1",
            "release_date": "2023-10-17"
        },
        "explicit": true,
        "popularity": 73
    })
}

fn full_features_payload() -> Value {
    json!({
        "danceability": 0.7,
        "energy": 0.8,
        "key": 5,
        "loudness": -6.5,
        "mode": 1,
        "speechiness": 0.05,
        "acousticness": 0.1,
        "instrumentalness": 0.0,
        "liveness": 0.12,
        "valence": 0.9,
        "tempo": 120.0,
        "time_signature": 4,
        "duration_ms": 210000
    })
}

#[test]
fn test_build_track_record_full_payload() {
    let record = build_track_record("track1", &full_track_payload(), &full_features_payload());

    assert_eq!(record.id, "track1");
    assert_eq!(record.name, Some("Test Song".to_string()));
    assert_eq!(
        record.artists,
        Some(vec!["artist1".to_string(), "artist2".to_string()])
    );
    assert_eq!(record.album, Some("album1".to_string()));
    assert_eq!(record.release_date, Some("2023-10-17".to_string()));
    assert_eq!(record.explicit, Some(true));
    assert_eq!(record.popularity, Some(73));
    assert_eq!(record.danceability, Some(0.7));
    assert_eq!(record.energy, Some(0.8));
    assert_eq!(record.key, Some(5));
    assert_eq!(record.loudness, Some(-6.5));
    assert_eq!(record.mode, Some(1));
    assert_eq!(record.tempo, Some(120.0));
    assert_eq!(record.time_signature, Some(4));
    assert_eq!(record.duration_ms, Some(210000));
}

#[test]
fn test_build_track_record_empty_payloads() {
    let record = build_track_record("track1", &json!({}), &json!({}));

    // The record stays structurally complete: every field present, all
    // marked missing except the caller-supplied id
    assert_eq!(record.id, "track1");
    assert_eq!(record.name, None);
    assert_eq!(record.artists, None);
    assert_eq!(record.album, None);
    assert_eq!(record.release_date, None);
    assert_eq!(record.explicit, None);
    assert_eq!(record.popularity, None);
    assert_eq!(record.danceability, None);
    assert_eq!(record.tempo, None);
    assert_eq!(record.duration_ms, None);
}

#[test]
fn test_build_track_record_null_album_affects_only_album_fields() {
    let mut info = full_track_payload();
    info["album"] = Value::Null;

    let record = build_track_record("track1", &info, &full_features_payload());

    // Fields below the null intermediate are missing
    assert_eq!(record.album, None);
    assert_eq!(record.release_date, None);

    // Sibling fields are unaffected
    assert_eq!(record.name, Some("Test Song".to_string()));
    assert_eq!(record.explicit, Some(true));
    assert_eq!(record.energy, Some(0.8));
}

#[test]
fn test_build_track_record_wrong_types_become_missing() {
    let info = json!({
        "name": 42,
        "artists": "not-a-list",
        "explicit": "yes",
        "popularity": "high"
    });

    // Local tracks have no audio analysis at all
    let features = json!(null);

    let record = build_track_record("track1", &info, &features);

    assert_eq!(record.name, None);
    assert_eq!(record.artists, None);
    assert_eq!(record.explicit, None);
    assert_eq!(record.popularity, None);
    assert_eq!(record.danceability, None);
    assert_eq!(record.valence, None);
}

#[test]
fn test_build_album_record() {
    let info = json!({
        "name": "Test Album",
        "artists": [{"id": "artist1"}],
        "release_date": "2022-01-01",
        "tracks": {
            "items": [{"id": "t1"}, {"id": "t2"}, {"id": null}]
        }
    });

    let record = build_album_record("album1", &info);

    assert_eq!(record.id, "album1");
    assert_eq!(record.name, Some("Test Album".to_string()));
    assert_eq!(record.artists, Some(vec!["artist1".to_string()]));
    assert_eq!(record.release_date, Some("2022-01-01".to_string()));

    // The null-id slot is skipped, not reported as an error
    assert_eq!(record.tracks, Some(vec!["t1".to_string(), "t2".to_string()]));
}

#[test]
fn test_build_album_record_without_track_listing() {
    let record = build_album_record("album1", &json!({"name": "Sparse"}));

    assert_eq!(record.name, Some("Sparse".to_string()));
    assert_eq!(record.tracks, None);
    assert_eq!(record.artists, None);
    assert_eq!(record.release_date, None);
}

#[test]
fn test_build_artist_record() {
    let info = json!({
        "name": "Test Artist",
        "followers": {"total": 12345},
        "genres": ["rock", "indie"],
        "popularity": 64
    });
    let top = json!({
        "tracks": [{"id": "t1"}, {"id": "t2"}]
    });

    let record = build_artist_record(
        "artist1",
        &info,
        vec!["album1".to_string(), "album2".to_string()],
        &top,
    );

    assert_eq!(record.id, "artist1");
    assert_eq!(record.name, Some("Test Artist".to_string()));
    assert_eq!(record.followers, Some(12345));
    assert_eq!(
        record.genres,
        Some(vec!["rock".to_string(), "indie".to_string()])
    );
    assert_eq!(record.popularity, Some(64));
    assert_eq!(record.albums, vec!["album1", "album2"]);
    assert_eq!(
        record.top_tracks,
        Some(vec!["t1".to_string(), "t2".to_string()])
    );
}

#[test]
fn test_build_artist_record_missing_follower_total() {
    // followers present but without the nested total
    let info = json!({
        "name": "Test Artist",
        "followers": {}
    });

    let record = build_artist_record("artist1", &info, Vec::new(), &json!({}));

    assert_eq!(record.followers, None);
    assert_eq!(record.genres, None);
    assert_eq!(record.top_tracks, None);
    assert!(record.albums.is_empty());
}
