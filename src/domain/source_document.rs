use bytes::Bytes;

use super::{DocumentId, MediaType};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// The document handed over by the file-acquisition side.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub id: DocumentId,
    pub filename: String,
    pub media_type: MediaType,
    pub data: Bytes,
}

impl SourceDocument {
    pub fn new(filename: String, media_type: MediaType, data: Bytes) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            media_type,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    /// Short file info line, e.g. `0.50 MB • PDF`.
    pub fn describe(&self) -> String {
        format!(
            "{:.2} MB • {}",
            self.size_bytes() as f64 / BYTES_PER_MB,
            self.media_type.label()
        )
    }
}
