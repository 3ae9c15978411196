use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use mixcli::{cli, config, error, types::PkceToken};
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

    /// List your playlists
    Playlists,

    /// List the tracks of a playlist
    Tracks(TracksOptions),

    /// Generate a recommendation playlist from a seed playlist
    Generate(GenerateOptions),

    /// Save the last generated playlist to Spotify
    Save(SaveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Id of the playlist
    playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Id of the seed playlist
    playlist_id: String,

    /// Number of tracks to generate (1 to 100)
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    length: u32,

    /// Send the same first up-to-5 seeds on every request instead of
    /// rotating the seed window per iteration
    #[clap(long)]
    static_seeds: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SaveOptions {
    /// Name of the new playlist
    name: String,
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
        Command::Playlists => cli::list_playlists().await,
        Command::Tracks(opt) => cli::list_tracks(opt.playlist_id).await,
        Command::Generate(opt) => {
            cli::generate(opt.playlist_id, opt.length as usize, opt.static_seeds).await
        }
        Command::Save(opt) => cli::save(opt.name).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
