// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use crate::graph::InfluenceGraph;

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Persistence {
            path: dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "path exists but is not a directory",
            ),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::Persistence { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

/// Create the directory a file will be written into, if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Render the graph as Graphviz DOT into `path`. Returns the path written.
pub fn write_graph_dot(path: &Path, graph: &InfluenceGraph) -> Result<PathBuf> {
    ensure_parent(path)?;
    fs::write(path, graph.to_dot()).map_err(|source| Error::Persistence { path: path.to_path_buf(), source })?;
    Ok(path.to_path_buf())
}
