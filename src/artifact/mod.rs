//! Artifact reading abstraction
//!
//! The PII scan needs the content of `csv`-typed artifacts. Reads go
//! through the [`ArtifactReader`] capability trait so the engine never
//! touches the filesystem directly and tests can inject fixtures.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::errors::TillsynError;
use crate::domain::result::Result;

/// Capability trait for reading artifact content.
#[async_trait]
pub trait ArtifactReader: Send + Sync {
    /// Read the artifact at `path` (relative to the pack root) into a
    /// string. Failure is surfaced immediately; the engine treats an
    /// unreadable artifact as fatal for PII certification.
    async fn read_to_string(&self, path: &str) -> Result<String>;
}

/// Filesystem-backed reader resolving paths against a pack root.
pub struct FsArtifactReader {
    root: PathBuf,
}

impl FsArtifactReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ArtifactReader for FsArtifactReader {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.root.join(path);
        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|e| TillsynError::Io(format!("{}: {e}", full_path.display())))
    }
}
