use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(String),

    #[error("unknown earthly branch: {0:?}")]
    UnknownBranch(String),

    #[error("unknown element: {0:?} (expected 金 木 水 火 土)")]
    UnknownElement(String),

    #[error("a pillar is exactly one stem and one branch, got {0:?}")]
    InvalidPillar(String),

    #[error("invalid birth data: {message}")]
    InvalidBirthData { message: String },

    #[error("invalid surname: {message}")]
    InvalidSurname { message: String },

    #[error("malformed {collection} corpus document: {source}")]
    MalformedCorpus {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl NamingError {
    pub(crate) fn birth(message: impl Into<String>) -> Self {
        Self::InvalidBirthData {
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NamingError>;
