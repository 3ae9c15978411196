use reqwest::{Client, StatusCode};

use crate::types::{RecommendationsResponse, Track};

/// Outcome of one recommendation request.
///
/// Rate limiting is not an error here: the generation loop owns the retry
/// policy, so a 429 is surfaced with its parsed `Retry-After` delay and the
/// caller decides how long to sleep and whether its retry budget is spent.
#[derive(Debug)]
pub enum RecommendationPage {
    /// Candidate tracks in response order.
    Tracks(Vec<Track>),
    /// The endpoint answered 429; `retry_after` is the `Retry-After` header
    /// in seconds, defaulting to 0 when absent or unparsable.
    RateLimited { retry_after: u64 },
}

/// Issues one recommendation request with up to 5 seed tracks and nine
/// feature-target parameters.
///
/// # Arguments
///
/// * `api_url` - Base URL of the Spotify Web API
/// * `token` - Valid access token for Spotify API authentication
/// * `seed_ids` - Up to 5 seed track ids; joined into `seed_tracks`
/// * `targets` - The `target_*` name/value pairs for this iteration
/// * `limit` - Result page size requested from the endpoint
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(RecommendationPage)` - Candidate tracks, or the rate-limit signal
/// - `Err(reqwest::Error)` - Network error or any other non-success status
pub async fn get_recommendations(
    api_url: &str,
    token: &str,
    seed_ids: &[String],
    targets: &[(&'static str, f64)],
    limit: u32,
) -> Result<RecommendationPage, reqwest::Error> {
    let mut params: Vec<(&str, String)> = vec![
        ("seed_tracks", seed_ids.join(",")),
        ("limit", limit.to_string()),
    ];
    for (name, value) in targets {
        params.push((name, value.to_string()));
    }

    let request_url = format!("{uri}/recommendations", uri = api_url);

    let client = Client::new();
    let response = client
        .get(&request_url)
        .query(&params)
        .bearer_auth(token)
        .send()
        .await?;

    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .map(|v| v.to_str().unwrap_or("0").parse::<u64>().unwrap_or(0))
            .unwrap_or(0);
        return Ok(RecommendationPage::RateLimited { retry_after });
    }

    let response = response.error_for_status()?;
    let res = response.json::<RecommendationsResponse>().await?;

    Ok(RecommendationPage::Tracks(res.tracks))
}
