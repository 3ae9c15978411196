use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify, types::Token};

/// Owns the cached OAuth token and refreshes it transparently when it is
/// about to expire.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns a valid access token, refreshing and re-persisting it first
    /// when the cached one is within the expiry buffer.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = spotify::auth::refresh_token(&self.token.refresh_token).await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    /// Whether the cached token is inside the refresh buffer of 4 minutes
    /// before the actual expiry. Tokens shorter-lived than the buffer count
    /// as expired immediately.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        let refresh_at = (self.token.obtained_at + self.token.expires_in).saturating_sub(240);
        now >= refresh_at
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mixcli/cache/token.json");
        path
    }
}
