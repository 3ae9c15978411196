use std::{io::Error, path::PathBuf};

use crate::types::GeneratedTrack;

#[derive(Debug)]
pub enum SessionError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for SessionError {
    fn from(err: Error) -> Self {
        SessionError::IoError(err)
    }
}

/// Filesystem-backed store carrying the generated tracks between the
/// `generate` and `save` commands.
///
/// The session is created when a generation succeeds, consumed by `save`,
/// and cleared afterwards; a stale file is simply overwritten by the next
/// generation.
pub struct SessionManager {
    tracks: Vec<GeneratedTrack>,
}

impl SessionManager {
    pub fn new(tracks: Vec<GeneratedTrack>) -> Self {
        Self { tracks }
    }

    pub fn tracks(&self) -> &Vec<GeneratedTrack> {
        &self.tracks
    }

    pub async fn persist(&self) -> Result<(), SessionError> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SessionError::IoError)?;
        }

        let json =
            serde_json::to_string_pretty(&self.tracks).map_err(SessionError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(SessionError::IoError)
    }

    pub async fn load() -> Result<Self, SessionError> {
        let path = Self::session_path();
        let json = async_fs::read_to_string(path)
            .await
            .map_err(SessionError::IoError)?;
        let tracks: Vec<GeneratedTrack> =
            serde_json::from_str(&json).map_err(SessionError::SerdeError)?;
        Ok(Self { tracks })
    }

    pub async fn clear() -> Result<(), SessionError> {
        let path = Self::session_path();
        async_fs::remove_file(path)
            .await
            .map_err(SessionError::IoError)
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mixcli/session/generated.json");
        path
    }
}
