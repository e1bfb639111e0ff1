use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RecognitionClient, RecognitionClientError, RecognitionRequest};
use crate::infrastructure::observability::log_excerpt;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Recognition through the Gemini `generateContent` endpoint with a declared
/// JSON response schema.
pub struct GeminiRecognitionClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiRecognitionClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn into_text(self) -> Result<String, RecognitionClientError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(RecognitionClientError::ApiRequestFailed(format!(
                "request blocked: {reason}"
            )));
        }

        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            RecognitionClientError::InvalidResponse("response has no candidates".to_string())
        })?;

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            return Err(RecognitionClientError::InvalidResponse(format!(
                "candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw body.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl RecognitionClient for GeminiRecognitionClient {
    #[tracing::instrument(
        skip(self, request),
        fields(model = %self.model, media_type = %request.media_type)
    )]
    async fn recognize(
        &self,
        request: RecognitionRequest<'_>,
    ) -> Result<String, RecognitionClientError> {
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: request.media_type.as_mime(),
                            data: general_purpose::STANDARD.encode(request.data),
                        },
                    },
                    RequestPart::Text {
                        text: request.instructions,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: request.response_schema,
            },
        };

        tracing::debug!(size_bytes = request.data.len(), "Sending document to Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecognitionClientError::ApiRequestFailed("timeout".to_string())
                } else {
                    RecognitionClientError::ApiRequestFailed(e.to_string())
                }
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RecognitionClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %log_excerpt(&text), "Gemini returned an error");
            return Err(RecognitionClientError::ApiRequestFailed(api_error_message(
                &text,
            )));
        }

        let raw_bytes = response.bytes().await.map_err(|e| {
            RecognitionClientError::ApiRequestFailed(format!("Gemini network/read error: {e}"))
        })?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            let raw_text = String::from_utf8_lossy(&raw_bytes);
            tracing::error!(
                raw_response = %log_excerpt(&raw_text),
                "Failed to parse Gemini JSON"
            );
            RecognitionClientError::InvalidResponse(format!("Gemini JSON parse error: {e}"))
        })?;

        parsed.into_text()
    }
}
