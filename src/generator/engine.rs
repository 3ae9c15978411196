use std::collections::HashSet;
use std::time::Duration;

use tokio::time::sleep;

use crate::generator::{GeneratorError, adjust, profile};
use crate::spotify::recommendations::{self, RecommendationPage};
use crate::spotify::{features, library};
use crate::types::{GeneratedTrack, Track};
use crate::utils;

/// Tuning knobs of one generation request.
///
/// `rotate_seeds` selects between the corrected seed-window behavior (the
/// window advances by iteration, the default) and the static window where
/// the same first up-to-5 seeds are sent on every request.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the Spotify Web API.
    pub api_url: String,
    /// Number of tracks the caller asked for.
    pub playlist_length: usize,
    /// Advance the seed window each iteration instead of reusing the first
    /// up-to-5 seeds forever.
    pub rotate_seeds: bool,
    /// Ceiling on recommendation iterations before giving up.
    pub max_iterations: u32,
    /// Ceiling on consecutive 429 retries of a single iteration.
    pub max_rate_limit_retries: u32,
    /// `limit` parameter of each recommendation request.
    pub page_limit: u32,
    /// Preventive pause before every recommendation request.
    pub pause: Duration,
}

impl GeneratorConfig {
    pub fn new(api_url: impl Into<String>, playlist_length: usize) -> Self {
        GeneratorConfig {
            api_url: api_url.into(),
            playlist_length,
            rotate_seeds: true,
            max_iterations: 50,
            max_rate_limit_retries: 5,
            page_limit: 100,
            pause: Duration::from_millis(500),
        }
    }
}

/// Runs one full generation request and returns the accepted tracks in
/// acceptance order.
///
/// The exclusion set (everything the user already owns) and the feature
/// profile are computed once up front; failures there abort before the loop
/// starts. The loop then requests recommendations with adjusted targets,
/// accepting candidates that are neither owned nor already collected, until
/// `playlist_length` tracks are gathered.
///
/// A 429 response retries the same iteration after `Retry-After + 1`
/// seconds without consuming an iteration slot. Any other non-success
/// status aborts the whole request; no partial result is returned.
pub async fn generate(
    config: &GeneratorConfig,
    token: &str,
    seed_ids: &[String],
) -> Result<Vec<GeneratedTrack>, GeneratorError> {
    if seed_ids.is_empty() {
        return Err(GeneratorError::EmptySeeds);
    }

    let owned_ids = library::all_user_track_ids(&config.api_url, token).await?;
    let seed_features = features::get_audio_features(&config.api_url, token, seed_ids).await?;
    let profile = profile::average_features(&seed_features)?;

    let mut accepted: Vec<Track> = Vec::new();
    let mut accepted_ids: HashSet<String> = HashSet::new();
    let mut iteration: u32 = 0;
    let mut rate_limit_retries: u32 = 0;

    while accepted.len() < config.playlist_length {
        if iteration >= config.max_iterations {
            return Err(GeneratorError::InsufficientRecommendations {
                collected: accepted.len(),
                requested: config.playlist_length,
            });
        }

        // Preventive throttle, applied whether or not the previous request
        // was rate limited.
        sleep(config.pause).await;

        let seeds = utils::select_seed_tracks(seed_ids, iteration, config.rotate_seeds);
        let targets = adjust::recommendation_targets(&profile, iteration);

        let page = recommendations::get_recommendations(
            &config.api_url,
            token,
            &seeds,
            &targets,
            config.page_limit,
        )
        .await?;

        match page {
            RecommendationPage::RateLimited { retry_after } => {
                if rate_limit_retries >= config.max_rate_limit_retries {
                    return Err(GeneratorError::RateLimitExceeded {
                        retries: rate_limit_retries,
                    });
                }
                rate_limit_retries += 1;
                sleep(Duration::from_secs(retry_after + 1)).await;
                // Retry the same iteration without advancing state.
                continue;
            }
            RecommendationPage::Tracks(tracks) => {
                rate_limit_retries = 0;
                for track in tracks {
                    let Some(id) = track.id.clone() else {
                        continue;
                    };
                    if owned_ids.contains(&id) || accepted_ids.contains(&id) {
                        continue;
                    }
                    accepted_ids.insert(id);
                    accepted.push(track);
                    if accepted.len() >= config.playlist_length {
                        break;
                    }
                }
            }
        }

        iteration += 1;
    }

    Ok(accepted.into_iter().map(to_generated_track).collect())
}

fn to_generated_track(track: Track) -> GeneratedTrack {
    GeneratedTrack {
        id: track.id.unwrap_or_default(),
        name: track.name,
        artist: track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        image_url: track
            .album
            .images
            .first()
            .map(|i| i.url.clone())
            .unwrap_or_default(),
    }
}
