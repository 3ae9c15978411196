use tabled::Table;

use crate::{
    config, error,
    generator::{self, GeneratorConfig},
    info,
    management::{SessionManager, TokenManager},
    spotify, success,
    types::TrackTableRow,
};

use super::playlists::spinner;

pub async fn generate(playlist_id: String, length: usize, static_seeds: bool) {
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

    info!("Collecting seed tracks from playlist {}", playlist_id);
    let seed_tracks = match spotify::library::get_playlist_tracks(&api_url, &token, &playlist_id)
        .await
    {
        Ok(tracks) => tracks,
        Err(e) => {
            error!("Failed to fetch tracks for playlist {}: {}", playlist_id, e);
        }
    };

    let seed_ids: Vec<String> = seed_tracks.into_iter().filter_map(|t| t.id).collect();
    if seed_ids.is_empty() {
        error!("Playlist {} has no usable tracks.", playlist_id);
    }

    let mut generator_config = GeneratorConfig::new(api_url, length);
    generator_config.rotate_seeds = !static_seeds;

    let pb = spinner("Generating playlist...");

    let generated = match generator::generate(&generator_config, &token, &seed_ids).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to generate playlist: {}", e);
        }
    };

    success!("Generated {} tracks.", generated.len());

    let table_rows: Vec<TrackTableRow> = generated
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artist: t.artist.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);

    let session = SessionManager::new(generated);
    if let Err(e) = session.persist().await {
        error!("Failed to store generated tracks: {:?}", e);
    }

    info!("Run mixcli save <NAME> to save this playlist to Spotify.");
}
