// src/store.rs

// Flat JSON file holding the whole author map.

use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::file::ensure_parent;
use crate::model::AuthorMap;

/// Read the author map. A missing file is "no prior state" (`Ok(None)`),
/// not an error.
pub fn load(path: &Path) -> Result<Option<AuthorMap>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no author store yet");
            return Ok(None);
        }
        Err(source) => return Err(Error::Persistence { path: path.to_path_buf(), source }),
    };

    let authors: AuthorMap = serde_json::from_str(&text)
        .map_err(|source| Error::Corrupt { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), authors = authors.len(), "author store loaded");
    Ok(Some(authors))
}

/// Write the author map as 4-space indented JSON, replacing the file.
pub fn save(path: &Path, authors: &AuthorMap) -> Result<()> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    authors
        .serialize(&mut ser)
        .map_err(|source| Error::Corrupt { path: path.to_path_buf(), source })?;
    buf.push(b'\n');

    ensure_parent(path)?;
    fs::write(path, buf).map_err(|source| Error::Persistence { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), authors = authors.len(), "author store saved");
    Ok(())
}
