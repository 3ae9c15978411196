use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub const SEED_TRACKS_MAX: usize = 5;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

pub fn chunk_track_ids(track_ids: &[String], max_len: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for id in track_ids {
        if !current.is_empty() && current.len() + 1 + id.len() > max_len {
            chunks.push(current);
            current = String::new();
        }
        if !current.is_empty() {
            current.push(',');
        }
        current.push_str(id);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

pub fn select_seed_tracks(seed_ids: &[String], iteration: u32, rotate: bool) -> Vec<String> {
    if seed_ids.is_empty() {
        return Vec::new();
    }

    let count = seed_ids.len().min(SEED_TRACKS_MAX);
    let start = if rotate {
        (SEED_TRACKS_MAX * iteration as usize) % seed_ids.len()
    } else {
        0
    };

    seed_ids
        .iter()
        .cycle()
        .skip(start)
        .take(count)
        .cloned()
        .collect()
}
