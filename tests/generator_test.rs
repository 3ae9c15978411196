use mixcli::generator::{GeneratorError, adjust_feature, average_features, recommendation_targets};
use mixcli::types::AudioFeatures;

const EPSILON: f64 = 1e-9;

fn make_features(id: &str, base: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        danceability: base,
        energy: base + 0.1,
        valence: base + 0.2,
        acousticness: base / 2.0,
        instrumentalness: base / 4.0,
        liveness: base / 8.0,
        loudness: -10.0 + base,
        speechiness: base / 16.0,
        tempo: 100.0 + base * 50.0,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_average_features_is_attribute_wise_mean() {
    let input = vec![
        make_features("a", 0.2),
        make_features("b", 0.4),
        make_features("c", 0.6),
    ];

    let profile = average_features(&input).unwrap();

    assert_close(profile.danceability, 0.4);
    assert_close(profile.energy, 0.5);
    assert_close(profile.valence, 0.6);
    assert_close(profile.acousticness, 0.2);
    assert_close(profile.instrumentalness, 0.1);
    assert_close(profile.liveness, 0.05);
    assert_close(profile.loudness, -9.6);
    assert_close(profile.speechiness, 0.025);
    assert_close(profile.tempo, 120.0);
}

#[test]
fn test_average_features_single_vector_identity() {
    let input = vec![make_features("a", 0.3)];
    let profile = average_features(&input).unwrap();

    assert_close(profile.danceability, input[0].danceability);
    assert_close(profile.energy, input[0].energy);
    assert_close(profile.valence, input[0].valence);
    assert_close(profile.acousticness, input[0].acousticness);
    assert_close(profile.instrumentalness, input[0].instrumentalness);
    assert_close(profile.liveness, input[0].liveness);
    assert_close(profile.loudness, input[0].loudness);
    assert_close(profile.speechiness, input[0].speechiness);
    assert_close(profile.tempo, input[0].tempo);
}

#[test]
fn test_average_features_empty_input_fails() {
    let result = average_features(&[]);
    assert!(matches!(result, Err(GeneratorError::NoAudioFeatures)));
}

#[test]
fn test_adjust_feature_iteration_zero_is_identity() {
    assert_close(adjust_feature(0.5, 0), 0.5);
    assert_close(adjust_feature(0.0, 0), 0.0);
    assert_close(adjust_feature(1.0, 0), 1.0);
}

#[test]
fn test_adjust_feature_even_iterations_push_up() {
    assert_close(adjust_feature(0.5, 2), 0.52);
    assert_close(adjust_feature(0.5, 4), 0.54);
    assert_close(adjust_feature(0.5, 10), 0.6);
}

#[test]
fn test_adjust_feature_odd_iterations_pull_down() {
    assert_close(adjust_feature(0.5, 1), 0.48);
    assert_close(adjust_feature(0.5, 3), 0.46);
    assert_close(adjust_feature(0.5, 9), 0.4);
}

#[test]
fn test_adjust_feature_clamps_to_bounds() {
    // upward adjustment never exceeds 1
    assert_close(adjust_feature(0.99, 4), 1.0);
    assert_close(adjust_feature(1.0, 2), 1.0);

    // downward adjustment never drops below 0
    assert_close(adjust_feature(0.01, 1), 0.0);
    assert_close(adjust_feature(0.0, 3), 0.0);
}

#[test]
fn test_recommendation_targets_passes_loudness_and_tempo_through() {
    let profile = average_features(&[make_features("a", 0.4)]).unwrap();

    // an odd iteration perturbs every bounded attribute
    let targets = recommendation_targets(&profile, 3);
    assert_eq!(targets.len(), 9);

    let lookup = |name: &str| {
        targets
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap()
    };

    assert_close(lookup("target_loudness"), profile.loudness);
    assert_close(lookup("target_tempo"), profile.tempo);
    assert_close(
        lookup("target_danceability"),
        adjust_feature(profile.danceability, 3),
    );
    assert_close(lookup("target_energy"), adjust_feature(profile.energy, 3));
    assert_close(
        lookup("target_speechiness"),
        adjust_feature(profile.speechiness, 3),
    );
}
