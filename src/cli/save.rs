use crate::{
    config, error, info,
    management::{SessionManager, TokenManager},
    spotify, success, warning,
};

pub async fn save(name: String) {
    let session = match SessionManager::load().await {
        Ok(s) => s,
        Err(_) => {
            error!("No generated playlist found. Run mixcli generate first.");
        }
    };

    if session.tracks().is_empty() {
        error!("The generated session is empty. Run mixcli generate first.");
    }

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

    info!("Creating playlist {}", name);
    let playlist = match spotify::playlist::create(&api_url, &token, &name).await {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create playlist: {}", e);
        }
    };

    // endpoint accepts up to 100 track URIs per request
    for chunk in session.tracks().chunks(100) {
        if let Err(e) = spotify::playlist::add_tracks(&api_url, &token, &playlist.id, chunk).await {
            error!("Failed to add tracks to playlist {}: {}", playlist.id, e);
        }
    }

    success!(
        "Saved {} tracks to playlist {}.",
        session.tracks().len(),
        name
    );

    if let Err(e) = SessionManager::clear().await {
        warning!("Failed to clear generated session: {:?}", e);
    }
}
