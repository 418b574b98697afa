use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum KeepsakeError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode photo {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("audio playback unavailable: {0}")]
    AudioUnavailable(String),
}

impl KeepsakeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
