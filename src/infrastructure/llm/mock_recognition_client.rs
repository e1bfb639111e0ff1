use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{RecognitionClient, RecognitionClientError, RecognitionRequest};

pub const SAMPLE_PAYLOAD: &str = r#"{
  "results": [
    { "id": "b1", "original": "你好", "reading": "nǐ hǎo", "language": "zh", "type": "sentence", "page": 1, "confidence": 0.97 },
    { "id": "b2", "original": "水", "reading": "みず", "language": "ja", "type": "vocabulary", "page": 1, "confidence": 0.92 },
    { "id": "b3", "original": "學校", "reading": "학교", "language": "ko", "type": "vocabulary", "page": 2, "confidence": 0.88 }
  ],
  "pageSummaries": [
    { "page": 1, "sentences": ["你好"], "vocabulary": ["水"] },
    { "page": 2, "sentences": [], "vocabulary": ["學校"] }
  ],
  "aggregatedSet": { "sentences": ["你好"], "vocabulary": ["水", "學校"] },
  "summary": { "totalBlocks": 3, "pageCount": 2 }
}"#;

/// Offline recognition client answering every call with a fixed body.
pub struct MockRecognitionClient {
    response: String,
    calls: AtomicUsize,
}

impl MockRecognitionClient {
    pub fn new() -> Self {
        Self::with_response(SAMPLE_PAYLOAD)
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRecognitionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecognitionClient for MockRecognitionClient {
    async fn recognize(
        &self,
        _request: RecognitionRequest<'_>,
    ) -> Result<String, RecognitionClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
