use serde::{Deserialize, Serialize};

/// Raw per-page listing, produced independently of the block extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page: u32,
    pub sentences: Vec<String>,
    pub vocabulary: Vec<String>,
}

impl PageSummary {
    pub fn total_items(&self) -> usize {
        self.sentences.len() + self.vocabulary.len()
    }
}
