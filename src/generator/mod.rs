//! # Generator Module
//!
//! The playlist generation engine. Given the tracks of a seed playlist it
//! computes an averaged acoustic-feature profile, builds the set of tracks the
//! user already owns, and then repeatedly queries the recommendation endpoint
//! with perturbed feature targets until enough unique, unknown tracks have
//! been collected.
//!
//! ## Pipeline
//!
//! ```text
//! seed track ids ──> spotify::features ──> profile::average_features
//! user library   ──> spotify::library  ──> exclusion set
//! profile + exclusion set ──> engine::generate (adjust targets per
//! iteration, dedup, rate-limit backoff) ──> Vec<GeneratedTrack>
//! ```
//!
//! The engine is strictly sequential: one network call at a time, with a
//! preventive pause between recommendation requests. All state lives in the
//! single [`engine::generate`] call, so concurrent generations for different
//! users share nothing but the issuing account's rate-limit budget.
//!
//! ## Termination
//!
//! The remote endpoint may keep returning tracks the user already owns, so
//! the loop is bounded by [`GeneratorConfig::max_iterations`] and surfaces
//! [`GeneratorError::InsufficientRecommendations`] when the bound is hit.
//! Rate-limit retries are bounded separately.

use std::fmt;

mod adjust;
mod engine;
mod profile;

pub use adjust::adjust_feature;
pub use adjust::recommendation_targets;
pub use engine::GeneratorConfig;
pub use engine::generate;
pub use profile::average_features;

/// Errors the generation engine can surface. Everything except rate-limit
/// responses is fatal for the whole generation request; no partial playlist
/// is ever returned.
#[derive(Debug)]
pub enum GeneratorError {
    /// The seed playlist contained no usable track ids.
    EmptySeeds,
    /// The feature endpoint returned no usable feature vectors, so no
    /// profile can be computed.
    NoAudioFeatures,
    /// The recommendation endpoint kept answering 429 past the retry budget.
    RateLimitExceeded { retries: u32 },
    /// The loop hit its iteration ceiling before enough unique tracks were
    /// collected.
    InsufficientRecommendations { collected: usize, requested: usize },
    /// Any other upstream failure (network error or non-success status).
    Api(reqwest::Error),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptySeeds => {
                write!(f, "seed playlist contains no usable tracks")
            }
            GeneratorError::NoAudioFeatures => {
                write!(f, "no audio features available for the seed tracks")
            }
            GeneratorError::RateLimitExceeded { retries } => {
                write!(f, "rate limited by Spotify after {} retries", retries)
            }
            GeneratorError::InsufficientRecommendations {
                collected,
                requested,
            } => {
                write!(
                    f,
                    "could not fill playlist: got {} of {} requested tracks",
                    collected, requested
                )
            }
            GeneratorError::Api(e) => write!(f, "Spotify API error: {}", e),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeneratorError {
    fn from(err: reqwest::Error) -> Self {
        GeneratorError::Api(err)
    }
}
