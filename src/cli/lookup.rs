use tabled::Table;

use crate::{
    cli::{fmt_list, fmt_value, require_token, spinner},
    spotify,
    types::{AlbumRecord, ArtistRecord, FieldTableRow, TrackRecord},
    warning,
};

/// Shows a single track with its audio features as a field/value table.
pub async fn track(id: String) {
    let token = require_token().await;

    let pb = spinner(format!("Fetching track {}...", id));
    let result = spotify::tracks::get_track(&token, &id).await;
    pb.finish_and_clear();

    match result {
        Ok(record) => render_track(&record),
        Err(e) => warning!("Failed to fetch track {}: {}", id, e),
    }
}

/// Shows a single album as a field/value table.
pub async fn album(id: String) {
    let token = require_token().await;

    let pb = spinner(format!("Fetching album {}...", id));
    let result = spotify::albums::get_album(&token, &id).await;
    pb.finish_and_clear();

    match result {
        Ok(record) => render_album(&record),
        Err(e) => warning!("Failed to fetch album {}: {}", id, e),
    }
}

/// Shows a single artist, their discography and top tracks as a
/// field/value table.
pub async fn artist(id: String) {
    let token = require_token().await;

    let pb = spinner(format!("Fetching artist {}...", id));
    let result = spotify::artists::get_artist(&token, &id).await;
    pb.finish_and_clear();

    match result {
        Ok(record) => render_artist(&record),
        Err(e) => warning!("Failed to fetch artist {}: {}", id, e),
    }
}

fn row(field: &str, value: String) -> FieldTableRow {
    FieldTableRow {
        field: field.to_string(),
        value,
    }
}

fn render_track(record: &TrackRecord) {
    let rows = vec![
        row("id", record.id.clone()),
        row("name", fmt_value(&record.name)),
        row("artists", fmt_list(&record.artists)),
        row("album", fmt_value(&record.album)),
        row("release_date", fmt_value(&record.release_date)),
        row("explicit", fmt_value(&record.explicit)),
        row("popularity", fmt_value(&record.popularity)),
        row("danceability", fmt_value(&record.danceability)),
        row("energy", fmt_value(&record.energy)),
        row("key", fmt_value(&record.key)),
        row("loudness", fmt_value(&record.loudness)),
        row("mode", fmt_value(&record.mode)),
        row("speechiness", fmt_value(&record.speechiness)),
        row("acousticness", fmt_value(&record.acousticness)),
        row("instrumentalness", fmt_value(&record.instrumentalness)),
        row("liveness", fmt_value(&record.liveness)),
        row("valence", fmt_value(&record.valence)),
        row("tempo", fmt_value(&record.tempo)),
        row("time_signature", fmt_value(&record.time_signature)),
        row("duration_ms", fmt_value(&record.duration_ms)),
    ];

    println!("{}", Table::new(rows));
}

fn render_album(record: &AlbumRecord) {
    let rows = vec![
        row("id", record.id.clone()),
        row("name", fmt_value(&record.name)),
        row("artists", fmt_list(&record.artists)),
        row("release_date", fmt_value(&record.release_date)),
        row("tracks", fmt_list(&record.tracks)),
    ];

    println!("{}", Table::new(rows));
}

fn render_artist(record: &ArtistRecord) {
    let rows = vec![
        row("id", record.id.clone()),
        row("name", fmt_value(&record.name)),
        row("followers", fmt_value(&record.followers)),
        row("genres", fmt_list(&record.genres)),
        row("popularity", fmt_value(&record.popularity)),
        row("albums", record.albums.join(", ")),
        row("top_tracks", fmt_list(&record.top_tracks)),
    ];

    println!("{}", Table::new(rows));
}
