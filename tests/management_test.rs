use chrono::Utc;

use mixcli::management::TokenManager;
use mixcli::types::Token;

fn make_token(expires_in: u64, obtained_at: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "user-library-read".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_fresh_token_is_not_expired() {
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::new(make_token(3600, now));
    assert!(!manager.is_expired());
}

#[test]
fn test_token_inside_refresh_buffer_is_expired() {
    let now = Utc::now().timestamp() as u64;
    // obtained 3400s ago with a one-hour lifetime: 200s remaining, inside
    // the 240-second refresh buffer
    let manager = TokenManager::new(make_token(3600, now - 3400));
    assert!(manager.is_expired());
}

#[test]
fn test_token_shorter_lived_than_buffer_is_expired_without_panicking() {
    let now = Utc::now().timestamp() as u64;
    // lifetime below the 240-second refresh buffer must count as expired
    // immediately instead of underflowing
    let manager = TokenManager::new(make_token(120, now));
    assert!(manager.is_expired());
}

#[test]
fn test_zero_lifetime_token_near_epoch_is_expired() {
    let manager = TokenManager::new(make_token(0, 0));
    assert!(manager.is_expired());
}
