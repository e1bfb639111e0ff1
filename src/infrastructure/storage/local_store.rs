use std::path::{Path, PathBuf};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::application::services::ExportArtifact;

/// Writes file exports into one directory on the local filesystem.
pub struct LocalArtifactStore {
    base_path: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ArtifactStoreError::Io)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn save(&self, artifact: &ExportArtifact) -> Result<PathBuf, ArtifactStoreError> {
        let file_name = artifact
            .file_name
            .as_deref()
            .ok_or_else(|| ArtifactStoreError::NotAFile(format!("{:?}", artifact.format)))?;

        let path = self.base_path.join(file_name);
        tokio::fs::write(&path, artifact.as_bytes())
            .await
            .map_err(|e| ArtifactStoreError::WriteFailed(format!("{}: {e}", path.display())))?;

        tracing::info!(
            path = %path.display(),
            size_bytes = artifact.body.len(),
            "Export written"
        );
        Ok(path)
    }
}
