use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// A bare track reference as it appears inside list responses.
///
/// The `id` is optional because local tracks and removed items carry a
/// null id in the Spotify payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub id: Option<String>,
}

/// One entry of `GET /me/tracks`; the track sits inside a wrapper object
/// next to the `added_at` timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTrackItem {
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksResponse {
    pub items: Vec<SavedTrackItem>,
}

/// One entry of `GET /playlists/{id}/tracks`; `track` is null for slots
/// whose content is no longer available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksInfo {
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub public: Option<bool>,
    pub tracks: Option<PlaylistTracksInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistAlbumsResponse {
    pub items: Vec<AlbumRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<TrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackUri {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveTracksRequest {
    pub tracks: Vec<TrackUri>,
}

/// A structurally complete track description.
///
/// Every field except the caller-supplied id is optional: a `None` means
/// the value could not be extracted from the upstream payload, which is
/// normal for e.g. local or unreleased tracks that lack audio-feature
/// data. Construction never fails on a partial payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub id: String,
    pub name: Option<String>,
    pub artists: Option<Vec<String>>,
    pub album: Option<String>,
    pub release_date: Option<String>,
    pub explicit: Option<bool>,
    pub popularity: Option<i64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub key: Option<i64>,
    pub loudness: Option<f64>,
    pub mode: Option<i64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
    pub time_signature: Option<i64>,
    pub duration_ms: Option<i64>,
}

/// A structurally complete album description, see [`TrackRecord`] for the
/// interpretation of `None` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumRecord {
    pub id: String,
    pub name: Option<String>,
    pub artists: Option<Vec<String>>,
    pub tracks: Option<Vec<String>>,
    pub release_date: Option<String>,
}

/// A structurally complete artist description, see [`TrackRecord`] for the
/// interpretation of `None` fields. `albums` comes from the paginated
/// discography listing rather than the artist object itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRecord {
    pub id: String,
    pub name: Option<String>,
    pub followers: Option<i64>,
    pub genres: Option<Vec<String>>,
    pub popularity: Option<i64>,
    pub albums: Vec<String>,
    pub top_tracks: Option<Vec<String>>,
}

#[derive(Tabled)]
pub struct FieldTableRow {
    pub field: String,
    pub value: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: String,
    pub visibility: String,
}

#[derive(Tabled)]
pub struct ExportTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub release_date: String,
    pub popularity: String,
    pub energy: String,
    pub tempo: String,
}
