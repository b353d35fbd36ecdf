// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a single operation. A missing author or a missing
/// profile section is not an error; those come back as `None` / empty values.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid url: {0}")]
    Url(String),

    #[error("could not access {path}: {source}")]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("author store {path} is unreadable: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// True when the remote site could not be reached or refused the request.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch { .. } | Error::Status { .. })
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Persistence { .. } | Error::Corrupt { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
