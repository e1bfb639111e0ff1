mod gemini_client;
mod mock_recognition_client;
mod recognition_client_factory;

pub use gemini_client::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GenerateContentResponse,
    GeminiRecognitionClient, api_error_message,
};
pub use mock_recognition_client::{MockRecognitionClient, SAMPLE_PAYLOAD};
pub use recognition_client_factory::{RecognitionClientFactory, RecognitionClientFactoryError};
