use std::sync::Arc;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spallcli::{cli, config, error, types::PkceToken, utils};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show a track with its audio features
    Track(TrackOptions),

    /// Show an album
    Album(AlbumOptions),

    /// Show an artist with albums and top tracks
    Artist(ArtistOptions),

    /// List your playlists
    Playlists,

    /// Get track recommendations for seeds and feature bounds
    Recommend(RecommendOptions),

    #[clap(about = "Rebuild the consolidated playlist from liked songs and playlists")]
    Consolidate(ConsolidateOptions),

    /// Export all tracks of a playlist as a table
    Export(ExportOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TrackOptions {
    /// Spotify track ID
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Spotify album ID
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Spotify artist ID
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Seed artist ID; can be repeated (at most 5 seeds in total)
    #[clap(long = "seed-artist", action = ArgAction::Append, num_args = 1)]
    seed_artists: Vec<String>,

    /// Seed genre; can be repeated (at most 5 seeds in total)
    #[clap(long = "seed-genre", action = ArgAction::Append, num_args = 1)]
    seed_genres: Vec<String>,

    /// Seed track ID; can be repeated (at most 5 seeds in total)
    #[clap(long = "seed-track", action = ArgAction::Append, num_args = 1)]
    seed_tracks: Vec<String>,

    /// Number of recommendations to return
    #[clap(long)]
    limit: Option<u32>,

    /// Lower bound for an audio feature, e.g. energy=0.5; can be repeated
    #[clap(
        long = "min",
        value_parser = utils::parse_feature_bound,
        action = ArgAction::Append,
        num_args = 1
    )]
    min: Vec<utils::FeatureBound>,

    /// Upper bound for an audio feature, e.g. tempo=140; can be repeated
    #[clap(
        long = "max",
        value_parser = utils::parse_feature_bound,
        action = ArgAction::Append,
        num_args = 1
    )]
    max: Vec<utils::FeatureBound>,

    /// Target value for an audio feature, e.g. valence=0.8; can be repeated
    #[clap(
        long = "target",
        value_parser = utils::parse_feature_bound,
        action = ArgAction::Append,
        num_args = 1
    )]
    target: Vec<utils::FeatureBound>,
}

#[derive(Parser, Debug, Clone)]
pub struct ConsolidateOptions {
    /// Name of the target playlist
    #[clap(long, default_value = "all")]
    name: String,

    /// Playlist name to leave out of the consolidation; can be repeated
    #[clap(long = "omit", action = ArgAction::Append, num_args = 1)]
    omit: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Spotify playlist ID
    playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Track(opt) => cli::track(opt.id).await,
        Command::Album(opt) => cli::album(opt.id).await,
        Command::Artist(opt) => cli::artist(opt.id).await,
        Command::Playlists => cli::playlists().await,
        Command::Recommend(opt) => {
            let filter = utils::RecommendationFilter {
                seed_artists: opt.seed_artists,
                seed_genres: opt.seed_genres,
                seed_tracks: opt.seed_tracks,
                limit: opt.limit,
                min: opt.min,
                max: opt.max,
                target: opt.target,
            };
            cli::recommend(filter).await
        }
        Command::Consolidate(opt) => cli::consolidate(opt.name, opt.omit).await,
        Command::Export(opt) => cli::export(opt.playlist_id).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
