use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{AggregatedSet, Block, PageSummary};

/// The complete result of one recognition call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub results: Vec<Block>,
    pub page_summaries: Vec<PageSummary>,
    pub aggregated_set: AggregatedSet,
    pub summary: PayloadSummary,
}

/// Counters as reported by the service. Never reconciled against `results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadSummary {
    pub total_blocks: u64,
    pub page_count: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON for the schema: {0}")]
    Parse(String),
    #[error("block {id} has page 0")]
    ZeroPage { id: String },
    #[error("block {id} has confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { id: String, confidence: f64 },
    #[error("duplicate block id: {0}")]
    DuplicateBlockId(String),
    #[error("page summary at index {0} has page 0")]
    ZeroSummaryPage(usize),
    #[error("aggregated sentences contain duplicate: {0}")]
    DuplicateSentence(String),
    #[error("aggregated vocabulary contains duplicate: {0}")]
    DuplicateVocabulary(String),
}

impl Payload {
    /// Parses and validates a payload. Anything that does not conform is rejected.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        let payload: Payload =
            serde_json::from_str(raw).map_err(|e| PayloadError::Parse(e.to_string()))?;
        payload.validate()?;
        Ok(payload)
    }

    pub fn validate(&self) -> Result<(), PayloadError> {
        let mut ids = HashSet::with_capacity(self.results.len());
        for block in &self.results {
            if block.page == 0 {
                return Err(PayloadError::ZeroPage {
                    id: block.id.clone(),
                });
            }
            if !(0.0..=1.0).contains(&block.confidence) {
                return Err(PayloadError::ConfidenceOutOfRange {
                    id: block.id.clone(),
                    confidence: block.confidence,
                });
            }
            if !ids.insert(block.id.as_str()) {
                return Err(PayloadError::DuplicateBlockId(block.id.clone()));
            }
        }

        if let Some(index) = self.page_summaries.iter().position(|s| s.page == 0) {
            return Err(PayloadError::ZeroSummaryPage(index));
        }

        if let Some(dup) = self.aggregated_set.first_duplicate_sentence() {
            return Err(PayloadError::DuplicateSentence(dup.to_string()));
        }
        if let Some(dup) = self.aggregated_set.first_duplicate_vocabulary() {
            return Err(PayloadError::DuplicateVocabulary(dup.to_string()));
        }

        Ok(())
    }
}
