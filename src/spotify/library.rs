use std::{collections::HashSet, marker::PhantomData, time::Duration};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::types::{Page, Playlist, Track, TrackItem};

const BAD_GATEWAY_RETRY_MAX: u32 = 2;

/// Lazy cursor over a `{items, next}` paginated collection endpoint.
///
/// Pages are produced on demand: each [`Pager::next_page`] call issues one
/// request against the current URL and remembers the response's `next`
/// pointer. The crawl ends when a page carries no `next`. Keeping the
/// sequence lazy means callers can stop early without fetching the whole
/// collection.
pub struct Pager<T> {
    next: Option<String>,
    token: String,
    _items: PhantomData<T>,
}

impl<T: DeserializeOwned> Pager<T> {
    pub fn new(first_url: String, token: &str) -> Self {
        Pager {
            next: Some(first_url),
            token: token.to_string(),
            _items: PhantomData,
        }
    }

    /// Fetches the next page, or `Ok(None)` once the collection is
    /// exhausted. 502 Bad Gateway responses are retried after a delay, a
    /// bounded number of times; other errors are propagated.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>, reqwest::Error> {
        let Some(url) = self.next.take() else {
            return Ok(None);
        };

        let mut bad_gateway_retries = 0;
        loop {
            let client = Client::new();
            let response = client.get(&url).bearer_auth(&self.token).send().await;

            let response = match response {
                Ok(resp) => match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY
                                && bad_gateway_retries < BAD_GATEWAY_RETRY_MAX
                            {
                                bad_gateway_retries += 1;
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                },
                Err(err) => {
                    return Err(err);
                } // network or reqwest error
            };

            let page = response.json::<Page<T>>().await?;
            self.next = page.next.clone();
            return Ok(Some(page));
        }
    }
}

/// Collects the ids of all tracks the user has saved (liked).
///
/// Follows the `/me/tracks` pagination sequentially until the last page.
/// Items whose underlying track is null or has no id (removed or local
/// tracks) are skipped, not counted.
pub async fn get_saved_track_ids(
    api_url: &str,
    token: &str,
) -> Result<HashSet<String>, reqwest::Error> {
    let mut ids: HashSet<String> = HashSet::new();
    let mut pager: Pager<TrackItem> = Pager::new(format!("{}/me/tracks", api_url), token);

    while let Some(page) = pager.next_page().await? {
        for item in page.items {
            if let Some(track) = item.track {
                if let Some(id) = track.id {
                    ids.insert(id);
                }
            }
        }
    }

    Ok(ids)
}

/// Retrieves all playlists of the authenticated user, following the
/// `/me/playlists` pagination until the last page.
pub async fn get_user_playlists(
    api_url: &str,
    token: &str,
) -> Result<Vec<Playlist>, reqwest::Error> {
    let mut playlists: Vec<Playlist> = Vec::new();
    let mut pager: Pager<Playlist> = Pager::new(format!("{}/me/playlists", api_url), token);

    while let Some(page) = pager.next_page().await? {
        playlists.extend(page.items);
    }

    Ok(playlists)
}

/// Retrieves all tracks of one playlist in playlist order, skipping null
/// (removed) entries.
pub async fn get_playlist_tracks(
    api_url: &str,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let mut tracks: Vec<Track> = Vec::new();
    let mut pager: Pager<TrackItem> = Pager::new(
        format!("{uri}/playlists/{id}/tracks", uri = api_url, id = playlist_id),
        token,
    );

    while let Some(page) = pager.next_page().await? {
        tracks.extend(page.items.into_iter().filter_map(|item| item.track));
    }

    Ok(tracks)
}

/// Builds the exclusion set for a generation request: the union of all
/// saved track ids and the track ids of every playlist the user has.
///
/// This is the dominant external I/O cost of a generation request - a
/// fully sequential crawl proportional to the library size. Duplicates
/// across playlists collapse into the set.
pub async fn all_user_track_ids(
    api_url: &str,
    token: &str,
) -> Result<HashSet<String>, reqwest::Error> {
    let mut ids = get_saved_track_ids(api_url, token).await?;

    for playlist in get_user_playlists(api_url, token).await? {
        for track in get_playlist_tracks(api_url, token, &playlist.id).await? {
            if let Some(id) = track.id {
                ids.insert(id);
            }
        }
    }

    Ok(ids)
}
