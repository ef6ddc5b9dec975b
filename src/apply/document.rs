use std::path::{Path, PathBuf};

use super::error::ApplyError;

/// A schema document read from disk, ready to be sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Schema name derived from the file stem (`todo.conf` -> `todo`)
    pub name: String,
    pub path: PathBuf,
    pub contents: String,
}

impl SchemaDocument {
    /// Read a schema document from `path`.
    pub async fn load(path: &Path) -> Result<Self, ApplyError> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| ApplyError::UnnamedDocument(path.to_path_buf()))?;

        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ApplyError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        if contents.trim().is_empty() {
            return Err(ApplyError::EmptyDocument(path.to_path_buf()));
        }

        tracing::debug!(
            "Loaded schema document '{}' ({} bytes) from {:?}",
            name,
            contents.len(),
            path
        );

        Ok(Self {
            name,
            path: path.to_path_buf(),
            contents,
        })
    }
}
