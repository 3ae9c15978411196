use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{types::AudioFeaturesResponse, types::AudioFeatures, utils};

/// Upper bound on the serialized, comma-joined id list of a single
/// audio-features request.
pub const FEATURE_IDS_MAX_LEN: usize = 2000;

const BAD_GATEWAY_RETRY_MAX: u32 = 2;

/// Retrieves audio-feature vectors for an arbitrary list of track ids.
///
/// The id list is split into comma-joined chunks whose serialized length
/// stays under [`FEATURE_IDS_MAX_LEN`] and one request is issued per chunk,
/// strictly in order; the per-chunk results are concatenated. The endpoint
/// returns a null entry for ids it cannot resolve, and those entries are
/// skipped rather than averaged into a profile later.
///
/// # Arguments
///
/// * `api_url` - Base URL of the Spotify Web API
/// * `token` - Valid access token for Spotify API authentication
/// * `track_ids` - Track ids to look up, in any quantity
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<AudioFeatures>)` - Feature vectors for all resolvable ids,
///   preserving request order
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried after a 10-second delay, at most
/// [`BAD_GATEWAY_RETRY_MAX`] times per chunk. Any other non-success status
/// is propagated immediately; a generation request never computes a profile
/// from a partially fetched feature set.
pub async fn get_audio_features(
    api_url: &str,
    token: &str,
    track_ids: &[String],
) -> Result<Vec<AudioFeatures>, reqwest::Error> {
    let mut features: Vec<AudioFeatures> = Vec::new();

    for chunk in utils::chunk_track_ids(track_ids, FEATURE_IDS_MAX_LEN) {
        let request_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = api_url,
            ids = chunk
        );

        let mut bad_gateway_retries = 0;
        loop {
            let client = Client::new();
            let response = client.get(&request_url).bearer_auth(token).send().await;

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

            let res = response.json::<AudioFeaturesResponse>().await?;
            features.extend(res.audio_features.into_iter().flatten());
            break;
        }
    }

    Ok(features)
}
