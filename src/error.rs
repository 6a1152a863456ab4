// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrailmarkError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid graph file {path}: {source}")]
    Parse {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Malformed graph: {0}")]
    Malformed(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TrailmarkError>;

// Allow `?` on std::io::Error by converting to TrailmarkError::Io with unknown path.
impl From<std::io::Error> for TrailmarkError {
    fn from(source: std::io::Error) -> Self {
        TrailmarkError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for TrailmarkError {
    fn from(e: walkdir::Error) -> Self {
        TrailmarkError::Other(e.to_string())
    }
}
