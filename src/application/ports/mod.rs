mod artifact_store;
mod recognition_client;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use recognition_client::{RecognitionClient, RecognitionClientError, RecognitionRequest};
