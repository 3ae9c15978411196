use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mixcli::generator::{GeneratorConfig, GeneratorError, generate};

fn feature_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "danceability": 0.5,
        "energy": 0.6,
        "valence": 0.4,
        "acousticness": 0.3,
        "instrumentalness": 0.2,
        "liveness": 0.1,
        "loudness": -7.5,
        "speechiness": 0.05,
        "tempo": 120.0
    })
}

fn track_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Track {}", id),
        "artists": [{"name": format!("Artist {}", id)}],
        "album": {"images": [{"url": format!("https://img.example/{}", id)}]}
    })
}

fn seed_ids() -> Vec<String> {
    (1..=5).map(|i| format!("seed{}", i)).collect()
}

// Short-pause config so the tests don't spend wall-clock time on the
// preventive throttle.
fn test_config(server: &MockServer, length: usize) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(server.uri(), length);
    config.pause = Duration::from_millis(10);
    config
}

/// Mounts saved tracks, playlists and audio features so a generation
/// request gets past its setup phase. `saved` becomes the exclusion set.
async fn mount_library(server: &MockServer, saved: &[&str]) {
    let items: Vec<serde_json::Value> = saved
        .iter()
        .map(|id| json!({"track": track_json(id)}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/me/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": items,
            "next": null
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "next": null
        })))
        .mount(server)
        .await;

    let features: Vec<serde_json::Value> = seed_ids().iter().map(|s| feature_json(s)).collect();
    Mock::given(method("GET"))
        .and(path("/audio-features"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "audio_features": features
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_first_response_fills_request_in_one_call() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("r1"), track_json("r2"), track_json("r3")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, 3);
    let result = generate(&config, "token", &seed_ids()).await.unwrap();

    assert_eq!(result.len(), 3);
    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
}

#[tokio::test]
async fn test_excluded_and_duplicate_tracks_are_skipped() {
    let server = MockServer::start().await;
    // id3 is already in the user's library
    mount_library(&server, &["id3"]).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("id3"), track_json("id4"), track_json("id5")]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("id6")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, 3);
    let result = generate(&config, "token", &seed_ids()).await.unwrap();

    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["id4", "id5", "id6"]);
}

#[tokio::test]
async fn test_already_accepted_tracks_never_repeat() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("t1"), track_json("t2")]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    // second page repeats t1, which must not appear twice
    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("t1"), track_json("t3")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, 3);
    let result = generate(&config, "token", &seed_ids()).await.unwrap();

    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[tokio::test]
async fn test_rate_limited_iteration_waits_and_retries() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "2"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("t1"), track_json("t2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, 2);
    let start = Instant::now();
    let result = generate(&config, "token", &seed_ids()).await.unwrap();

    // Retry-After of 2 plus the 1-second safety margin
    assert!(start.elapsed() >= Duration::from_secs(3));
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_rate_limit_retry_budget_is_bounded() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    // always rate limited, with no delay so the test stays fast
    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .mount(&server)
        .await;

    let mut config = test_config(&server, 2);
    config.max_rate_limit_retries = 2;

    let result = generate(&config, "token", &seed_ids()).await;
    assert!(matches!(
        result,
        Err(GeneratorError::RateLimitExceeded { retries: 2 })
    ));
}

#[tokio::test]
async fn test_non_convergence_hits_iteration_ceiling() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    // the endpoint keeps returning the same single track
    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [track_json("t1")]
        })))
        .expect(3)
        .mount(&server)
        .await;

    let mut config = test_config(&server, 2);
    config.max_iterations = 3;

    let result = generate(&config, "token", &seed_ids()).await;
    assert!(matches!(
        result,
        Err(GeneratorError::InsufficientRecommendations {
            collected: 1,
            requested: 2
        })
    ));
}

#[tokio::test]
async fn test_upstream_failure_aborts_without_partial_result() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, 3);
    let result = generate(&config, "token", &seed_ids()).await;
    assert!(matches!(result, Err(GeneratorError::Api(_))));
}

#[tokio::test]
async fn test_empty_seed_list_fails_fast() {
    // no server needed: the engine must bail before any network call
    let config = GeneratorConfig::new("http://127.0.0.1:9", 3);
    let result = generate(&config, "token", &[]).await;
    assert!(matches!(result, Err(GeneratorError::EmptySeeds)));
}

#[tokio::test]
async fn test_generated_track_mapping_takes_first_artist_and_image() {
    let server = MockServer::start().await;
    mount_library(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [{
                "id": "t1",
                "name": "Multi",
                "artists": [{"name": "First"}, {"name": "Second"}],
                "album": {"images": [{"url": "https://img.example/big"}, {"url": "https://img.example/small"}]}
            }, {
                // no artists and no cover art
                "id": "t2",
                "name": "Bare"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server, 2);
    let result = generate(&config, "token", &seed_ids()).await.unwrap();

    assert_eq!(result[0].artist, "First");
    assert_eq!(result[0].image_url, "https://img.example/big");
    assert_eq!(result[1].artist, "");
    assert_eq!(result[1].image_url, "");
}
