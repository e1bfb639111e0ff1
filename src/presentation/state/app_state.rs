use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ArtifactStore, ArtifactStoreError, RecognitionClient};
use crate::application::services::{ExportFormat, ExtractionService, Session, SessionError};
use crate::infrastructure::llm::{RecognitionClientFactory, RecognitionClientFactoryError};
use crate::infrastructure::observability::{TracingConfig, init_tracing};
use crate::infrastructure::storage::LocalArtifactStore;
use crate::presentation::config::{Environment, Settings, SettingsError};

/// Everything one document workflow needs: the session plus its collaborators.
pub struct AppState {
    pub session: Session<dyn RecognitionClient>,
    pub artifact_store: Arc<dyn ArtifactStore>,
    pub settings: Settings,
}

impl AppState {
    /// Loads `.env` and settings, installs tracing and wires the adapters.
    pub fn bootstrap() -> Result<Self, AppStateError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env().map_err(AppStateError::Environment)?;
        let settings = Settings::load(environment)?;
        init_tracing(&TracingConfig::from_settings(
            environment.as_str(),
            &settings.logging,
        ));

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: Settings) -> Result<Self, AppStateError> {
        let client = RecognitionClientFactory::create(&settings.recognition)?;
        let store = Arc::new(LocalArtifactStore::new(PathBuf::from(
            &settings.export.output_dir,
        ))?);
        Ok(Self::with_parts(settings, client, store))
    }

    pub fn with_parts(
        settings: Settings,
        client: Arc<dyn RecognitionClient>,
        artifact_store: Arc<dyn ArtifactStore>,
    ) -> Self {
        let extraction = ExtractionService::new(client)
            .with_timeout(Duration::from_secs(settings.recognition.timeout_secs));
        Self {
            session: Session::new(extraction),
            artifact_store,
            settings,
        }
    }

    /// Encodes the current payload and hands the file to the artifact store.
    pub async fn save_export(&self, format: ExportFormat) -> Result<PathBuf, AppStateError> {
        let artifact = self.session.export(format)?;
        Ok(self.artifact_store.save(&artifact).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("{0}")]
    Environment(String),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("recognition client: {0}")]
    RecognitionClient(#[from] RecognitionClientFactoryError),
    #[error("artifact store: {0}")]
    ArtifactStore(#[from] ArtifactStoreError),
    #[error("session: {0}")]
    Session(#[from] SessionError),
}
