use reqwest::Client;

use crate::types::{
    AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
    GeneratedTrack,
};

/// Creates a new private playlist for the authenticated user.
///
/// # Arguments
///
/// * `api_url` - Base URL of the Spotify Web API
/// * `token` - Valid access token for Spotify API authentication
/// * `name` - Display name of the playlist
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - Id and name of the created playlist
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
pub async fn create(
    api_url: &str,
    token: &str,
    name: &str,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Generated playlist based on your selected tracks".to_string(),
        public: false,
    };

    let client = Client::new();
    let response = client
        .post(format!("{uri}/me/playlists", uri = api_url))
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Adds generated tracks to a playlist as `spotify:track:` URIs.
///
/// The endpoint accepts at most 100 URIs per request; callers chunk
/// accordingly and invoke this once per chunk.
pub async fn add_tracks(
    api_url: &str,
    token: &str,
    playlist_id: &str,
    tracks: &[GeneratedTrack],
) -> Result<AddTracksResponse, reqwest::Error> {
    let request = AddTracksRequest {
        uris: tracks
            .iter()
            .map(|t| format!("spotify:track:{}", t.id))
            .collect(),
    };

    let client = Client::new();
    let response = client
        .post(format!(
            "{uri}/playlists/{id}/tracks",
            uri = api_url,
            id = playlist_id
        ))
        .bearer_auth(token)
        .json(&request)
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}
