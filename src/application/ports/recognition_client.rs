use async_trait::async_trait;

use crate::domain::MediaType;

/// One outbound call to the structured-recognition capability.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionRequest<'a> {
    pub data: &'a [u8],
    pub media_type: MediaType,
    pub instructions: &'a str,
    pub response_schema: &'a serde_json::Value,
}

/// Returns the raw structured text produced by the service; parsing it is
/// the caller's job.
#[async_trait]
pub trait RecognitionClient: Send + Sync {
    async fn recognize(
        &self,
        request: RecognitionRequest<'_>,
    ) -> Result<String, RecognitionClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RecognitionClientError {
    /// Diagnostic without the variant prefix, suitable for showing to a user.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::ApiRequestFailed(msg) | Self::InvalidResponse(msg) => msg.clone(),
            Self::RateLimited => "rate limited".to_string(),
        }
    }
}
