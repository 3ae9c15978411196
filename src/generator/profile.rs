use crate::generator::GeneratorError;
use crate::types::{AudioFeatures, FeatureProfile};

/// Reduces a list of per-track feature vectors to one averaged profile.
///
/// Each attribute of the result is the arithmetic mean of that attribute
/// across all input vectors. Pure and deterministic; a single-vector input
/// returns that vector's values unchanged.
///
/// # Errors
///
/// Returns [`GeneratorError::NoAudioFeatures`] for an empty input, which
/// would otherwise divide by zero.
pub fn average_features(features: &[AudioFeatures]) -> Result<FeatureProfile, GeneratorError> {
    if features.is_empty() {
        return Err(GeneratorError::NoAudioFeatures);
    }

    let mut profile = FeatureProfile::default();
    for f in features {
        profile.danceability += f.danceability;
        profile.energy += f.energy;
        profile.valence += f.valence;
        profile.acousticness += f.acousticness;
        profile.instrumentalness += f.instrumentalness;
        profile.liveness += f.liveness;
        profile.loudness += f.loudness;
        profile.speechiness += f.speechiness;
        profile.tempo += f.tempo;
    }

    let count = features.len() as f64;
    profile.danceability /= count;
    profile.energy /= count;
    profile.valence /= count;
    profile.acousticness /= count;
    profile.instrumentalness /= count;
    profile.liveness /= count;
    profile.loudness /= count;
    profile.speechiness /= count;
    profile.tempo /= count;

    Ok(profile)
}
