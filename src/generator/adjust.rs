use crate::types::FeatureProfile;

/// Perturbs a bounded feature value for one loop iteration.
///
/// Even iterations push the target up by `0.01 * i`, odd iterations pull it
/// down by `0.01 * (i + 1)`, clamped to `[0, 1]`. Iteration 0 is the
/// identity. Widening the target this way keeps successive recommendation
/// requests from asking for the exact same profile and receiving the same
/// saturated result set.
pub fn adjust_feature(base: f64, iteration: u32) -> f64 {
    if iteration % 2 == 0 {
        (base + iteration as f64 * 0.01).min(1.0)
    } else {
        (base - (iteration as f64 + 1.0) * 0.01).max(0.0)
    }
}

/// Builds the nine `target_*` query parameters for one recommendation
/// request. Loudness and tempo are unbounded attributes and are sent
/// verbatim every iteration; all other attributes go through
/// [`adjust_feature`].
pub fn recommendation_targets(
    profile: &FeatureProfile,
    iteration: u32,
) -> Vec<(&'static str, f64)> {
    vec![
        (
            "target_danceability",
            adjust_feature(profile.danceability, iteration),
        ),
        ("target_energy", adjust_feature(profile.energy, iteration)),
        ("target_valence", adjust_feature(profile.valence, iteration)),
        (
            "target_acousticness",
            adjust_feature(profile.acousticness, iteration),
        ),
        (
            "target_instrumentalness",
            adjust_feature(profile.instrumentalness, iteration),
        ),
        (
            "target_liveness",
            adjust_feature(profile.liveness, iteration),
        ),
        ("target_loudness", profile.loudness),
        (
            "target_speechiness",
            adjust_feature(profile.speechiness, iteration),
        ),
        ("target_tempo", profile.tempo),
    ]
}
