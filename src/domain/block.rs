use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One recognized linguistic unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub original: String,
    /// Pinyin, Furigana or Hangeul depending on `language`. May be empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reading: String,
    pub language: Language,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default = "default_page", deserialize_with = "null_as_first_page")]
    pub page: u32,
    pub confidence: f64,
}

fn default_page() -> u32 {
    1
}

fn null_as_first_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_page))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Block {
    pub fn has_reading(&self) -> bool {
        !self.reading.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    Ja,
    Ko,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Sentence,
    #[serde(alias = "word")]
    Vocabulary,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Sentence => "sentence",
            BlockKind::Vocabulary => "vocabulary",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
