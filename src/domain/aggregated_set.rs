use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Document-wide inventory. Each list holds unique strings in service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSet {
    pub sentences: Vec<String>,
    pub vocabulary: Vec<String>,
}

impl AggregatedSet {
    pub fn first_duplicate_sentence(&self) -> Option<&str> {
        first_duplicate(&self.sentences)
    }

    pub fn first_duplicate_vocabulary(&self) -> Option<&str> {
        first_duplicate(&self.vocabulary)
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .find(|item| !seen.insert(item.as_str()))
        .map(String::as_str)
}
