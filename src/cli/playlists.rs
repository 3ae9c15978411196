use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    management::TokenManager,
    spotify,
    types::{PlaylistTableRow, TrackTableRow},
    warning,
};

pub async fn list_playlists() {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run mixcli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let api_url = config::spotify_apiurl();

    let pb = spinner("Fetching playlists...");

    let playlists = match spotify::library::get_user_playlists(&api_url, &token).await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    if playlists.is_empty() {
        warning!("No playlists found.");
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

pub async fn list_tracks(playlist_id: String) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run mixcli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let api_url = config::spotify_apiurl();

    let pb = spinner("Fetching playlist tracks...");

    let tracks = match spotify::library::get_playlist_tracks(&api_url, &token, &playlist_id).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch tracks for playlist {}: {}", playlist_id, e);
        }
    };

    if tracks.is_empty() {
        warning!("No tracks found in playlist {}.", playlist_id);
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .into_iter()
        .map(|t| TrackTableRow {
            name: t.name,
            artist: t
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
