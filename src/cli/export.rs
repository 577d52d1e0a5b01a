use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    cli::{fmt_list, fmt_value, require_token, spinner},
    error, info, spotify,
    types::{ExportTableRow, TrackRecord},
    warning,
};

/// Renders every track of a playlist as a table.
///
/// Collects the playlist's track ids, then fetches each track's details
/// and audio features one by one. A track that cannot be fetched is
/// reported and skipped; the table still contains all remaining tracks.
pub async fn export(playlist_id: String) {
    let token = require_token().await;

    let pb = spinner("Collecting playlist tracks...".to_string());
    let track_ids = match spotify::playlists::get_playlist_tracks(&token, &playlist_id).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to read playlist {}: {}", playlist_id, e);
        }
    };

    if track_ids.is_empty() {
        info!("Playlist {} has no tracks.", playlist_id);
        return;
    }

    let pb = ProgressBar::new(track_ids.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} fetching track details")
            .unwrap(),
    );

    let mut rows: Vec<ExportTableRow> = Vec::new();
    for id in &track_ids {
        match spotify::tracks::get_track(&token, id).await {
            Ok(record) => rows.push(export_row(&record)),
            Err(e) => warning!("Failed to fetch track {}: {}", id, e),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let table = Table::new(rows);
    println!("{}", table);
}

fn export_row(record: &TrackRecord) -> ExportTableRow {
    ExportTableRow {
        name: fmt_value(&record.name),
        artists: fmt_list(&record.artists),
        album: fmt_value(&record.album),
        release_date: fmt_value(&record.release_date),
        popularity: fmt_value(&record.popularity),
        energy: fmt_value(&record.energy),
        tempo: fmt_value(&record.tempo),
    }
}
