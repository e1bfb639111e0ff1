use chrono::{DateTime, Utc};

use crate::domain::{ActiveView, Block, Payload};

pub const CSV_HEADER: &str = "Page,Type,Original,Reading,Language,Confidence";
pub const CSV_SEPARATOR_ROW: &str = "---,---,---,---,---,---";
pub const MISSING_READING: &str = "N/A";
const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain;charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv;charset=utf-8",
        }
    }
}

/// An encoded export. Text digests go to the clipboard and carry no file name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: Option<String>,
    pub content_type: &'static str,
    pub body: String,
}

impl ExportArtifact {
    pub fn as_bytes(&self) -> &[u8] {
        self.body.as_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("no extraction data available")]
    NoDataAvailable,
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Encodes the held payload, if any, in the requested format.
pub fn encode(
    payload: Option<&Payload>,
    view: ActiveView,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<ExportArtifact, ExportError> {
    let payload = payload.ok_or(ExportError::NoDataAvailable)?;
    let stamp = generated_at.timestamp_millis();

    let (file_name, body) = match format {
        ExportFormat::Text => (None, text_digest(payload, view)),
        ExportFormat::Json => (
            Some(format!("cjk_extraction_{stamp}.json")),
            json_snapshot(payload)?,
        ),
        ExportFormat::Csv => (
            Some(format!("cjk_db_ready_{stamp}.csv")),
            format!("{}{}", UTF8_BOM, csv_table(payload)),
        ),
    };

    Ok(ExportArtifact {
        format,
        file_name,
        content_type: format.content_type(),
        body,
    })
}

/// Plain-text digest of whichever view is active.
pub fn text_digest(payload: &Payload, view: ActiveView) -> String {
    match view {
        ActiveView::PageFeed => payload
            .results
            .iter()
            .map(feed_line)
            .collect::<Vec<_>>()
            .join("\n"),
        ActiveView::PageSummary => payload
            .page_summaries
            .iter()
            .map(|summary| {
                format!(
                    "=== PAGE {} ===\nSentences:\n{}\nVocabulary:\n{}",
                    summary.page,
                    summary.sentences.join("\n"),
                    summary.vocabulary.join("\n")
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
        // Both sections always appear here, even when one of them is empty.
        ActiveView::GlobalSet => format!(
            "=== GLOBAL UNIQUE SENTENCES ===\n{}\n\n=== GLOBAL UNIQUE VOCABULARY ===\n{}",
            payload.aggregated_set.sentences.join("\n"),
            payload.aggregated_set.vocabulary.join("\n")
        ),
    }
}

fn feed_line(block: &Block) -> String {
    let reading = if block.has_reading() {
        block.reading.as_str()
    } else {
        MISSING_READING
    };
    format!("[Page {}] {} ({})", block.page, block.original, reading)
}

/// Whole payload, pretty-printed. Key order follows the struct definitions.
pub fn json_snapshot(payload: &Payload) -> Result<String, ExportError> {
    serde_json::to_string_pretty(payload).map_err(|e| ExportError::Serialization(e.to_string()))
}

/// CSV table without the byte-order mark.
pub fn csv_table(payload: &Payload) -> String {
    let set = &payload.aggregated_set;
    let mut rows: Vec<String> = Vec::with_capacity(
        payload.results.len() + set.sentences.len() + set.vocabulary.len() + 4,
    );

    rows.push(CSV_HEADER.to_string());
    rows.extend(payload.results.iter().map(|block| {
        format!(
            "{},{},{},{},{},{}",
            block.page,
            block.kind,
            quote(&block.original),
            quote(&block.reading),
            block.language,
            block.confidence
        )
    }));

    rows.push(CSV_SEPARATOR_ROW.to_string());
    rows.push(format!("GLOBAL_SET,Sentences,{},,,", set.sentences.len()));
    rows.extend(
        set.sentences
            .iter()
            .map(|s| format!("GLOBAL_DATA,Sentence,{},,,", quote(s))),
    );
    rows.push(format!("GLOBAL_SET,Vocabulary,{},,,", set.vocabulary.len()));
    rows.extend(
        set.vocabulary
            .iter()
            .map(|v| format!("GLOBAL_DATA,Word,{},,,", quote(v))),
    );

    rows.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
