use tabled::Table;

use crate::{
    cli::{require_token, spinner},
    spotify,
    types::PlaylistTableRow,
    warning,
};

/// Lists the user's playlists as a table, sorted by name.
pub async fn playlists() {
    let token = require_token().await;

    let pb = spinner("Fetching playlists...".to_string());
    let result = spotify::playlists::get_playlists(&token).await;
    pb.finish_and_clear();

    match result {
        Ok(mut playlists) => {
            playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            let table_rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    name: p.name,
                    tracks: p
                        .tracks
                        .and_then(|t| t.total)
                        .map(|total| total.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    visibility: match p.public {
                        Some(true) => "public".to_string(),
                        Some(false) => "private".to_string(),
                        None => "-".to_string(),
                    },
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load playlists. Err: {}", e),
    }
}
