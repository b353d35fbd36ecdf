// src/model.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical author key, shared by the metadata map and the graph.
pub type AuthorName = String;

/// Everything known about authors, keyed by name. Ordered so the store file
/// and iteration are deterministic.
pub type AuthorMap = BTreeMap<AuthorName, AuthorRecord>;

/// Stored metadata for one author.
///
/// `website` and `genres` distinguish "never seen" (`None`) from "seen and
/// empty" (`Some(vec![])` for genres). Records created for a discovered
/// influence start out with only a `url`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// Names of the authors this one was influenced by. No duplicates.
    #[serde(default, rename = "influence")]
    pub influences: Vec<AuthorName>,
}

impl AuthorRecord {
    pub fn bare(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }
}

/// A name and the profile page it points at, as found in a search listing
/// or in someone's influences.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AuthorLink {
    pub name: AuthorName,
    pub url: String,
}

impl AuthorLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into() }
    }
}
