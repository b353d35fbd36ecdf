// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Immutable settings for one `Universe`. Built once and handed to the
/// constructor; nothing reads these from globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UniverseOptions {
    base_url: String,
    store_path: PathBuf,
    default_authors: Vec<String>,
}

impl Default for UniverseOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            store_path: PathBuf::from(STORE_FILE),
            default_authors: DEFAULT_AUTHORS.iter().map(|a| s!(*a)).collect(),
        }
    }
}

impl UniverseOptions {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_default_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Site root without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn search_endpoint(&self) -> String {
        join!(self.base_url(), SEARCH_PATH)
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn default_authors(&self) -> &[String] {
        &self.default_authors
    }
}
