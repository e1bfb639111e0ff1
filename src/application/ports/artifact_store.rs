use std::io;
use std::path::PathBuf;

use crate::application::services::ExportArtifact;

/// Receives file exports (the download side of the application).
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("artifact has no file name: {0}")]
    NotAFile(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
