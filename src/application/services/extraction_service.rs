use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{RecognitionClient, RecognitionRequest};
use crate::domain::{MediaType, Payload};

use super::extraction_task::{EXTRACTION_INSTRUCTIONS, payload_response_schema};

pub const DEFAULT_RECOGNITION_TIMEOUT: Duration = Duration::from_secs(300);
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Analysis failed. The PDF might be too large or encrypted.";
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported format. Please upload PDF or image files.";

/// Sends one document to the recognition service and validates what comes back.
pub struct ExtractionService<R>
where
    R: RecognitionClient + ?Sized,
{
    client: Arc<R>,
    response_schema: serde_json::Value,
    timeout: Duration,
}

impl<R> ExtractionService<R>
where
    R: RecognitionClient + ?Sized,
{
    pub fn new(client: Arc<R>) -> Self {
        Self {
            client,
            response_schema: payload_response_schema(),
            timeout: DEFAULT_RECOGNITION_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Exactly one call to the recognition client per invocation, no retries.
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    pub async fn extract(
        &self,
        data: &[u8],
        declared_media_type: &str,
    ) -> Result<Payload, ExtractionError> {
        let media_type = MediaType::from_mime(declared_media_type).ok_or_else(|| {
            ExtractionError::UnsupportedFormat(declared_media_type.to_string())
        })?;

        let request = RecognitionRequest {
            data,
            media_type,
            instructions: EXTRACTION_INSTRUCTIONS,
            response_schema: &self.response_schema,
        };

        let raw = tokio::time::timeout(self.timeout, self.client.recognize(request))
            .await
            .map_err(|_| {
                ExtractionError::ExtractionFailed(format!(
                    "recognition timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| {
                tracing::warn!(error = %e, "Recognition call failed");
                ExtractionError::ExtractionFailed(e.diagnostic())
            })?;

        let payload = Payload::from_json(&raw).map_err(|e| {
            tracing::error!(
                error = %e,
                response_chars = raw.chars().count(),
                "Recognition response does not match the payload schema"
            );
            ExtractionError::MalformedResponse(e.to_string())
        })?;

        tracing::info!(
            block_count = payload.results.len(),
            page_summaries = payload.page_summaries.len(),
            reported_pages = payload.summary.page_count,
            "Extraction complete"
        );

        Ok(payload)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ExtractionError {
    /// Text shown to the user. Service diagnostics are passed through verbatim.
    pub fn display_message(&self) -> String {
        match self {
            Self::UnsupportedFormat(_) => UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            Self::ExtractionFailed(msg) if msg.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            Self::ExtractionFailed(msg) => msg.clone(),
            Self::MalformedResponse(msg) => {
                format!("The recognition service returned unexpected data: {msg}")
            }
        }
    }
}
