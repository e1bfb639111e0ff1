use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::RecognitionClient;
use crate::presentation::config::{RecognitionProvider, RecognitionSettings};

use super::gemini_client::GeminiRecognitionClient;
use super::mock_recognition_client::MockRecognitionClient;

#[derive(Debug, thiserror::Error)]
pub enum RecognitionClientFactoryError {
    #[error("api_key is required for the Gemini provider")]
    MissingApiKey,
    #[error("recognition client initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct RecognitionClientFactory;

impl RecognitionClientFactory {
    pub fn create(
        settings: &RecognitionSettings,
    ) -> Result<Arc<dyn RecognitionClient>, RecognitionClientFactoryError> {
        match settings.provider {
            RecognitionProvider::Gemini => {
                let api_key = settings
                    .api_key
                    .as_deref()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or(RecognitionClientFactoryError::MissingApiKey)?;
                tracing::info!(
                    model = %settings.model,
                    base_url = %settings.base_url,
                    timeout_secs = settings.timeout_secs,
                    "Loading Gemini recognition client"
                );
                let client = GeminiRecognitionClient::new(
                    &settings.base_url,
                    &settings.model,
                    api_key,
                    Duration::from_secs(settings.timeout_secs),
                )
                .map_err(|e| RecognitionClientFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            RecognitionProvider::Mock => {
                tracing::info!("Loading mock recognition client");
                Ok(Arc::new(MockRecognitionClient::new()))
            }
        }
    }
}
