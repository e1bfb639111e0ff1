use serde_json::{Value, json};

/// Instruction text sent with every document. It asks for the three
/// independent outputs that make up a `Payload` in a single call.
pub const EXTRACTION_INSTRUCTIONS: &str = "You are a high-precision CJK linguistic pipeline. \
Analyze the entire attached document as one set of pages.\n\
\n\
Task 1: Page-by-page recognition\n\
- Extract every linguistic block from every page into `results`.\n\
- Tag each block with its language: 'zh', 'ja' or 'ko'.\n\
- Tag each block with its type: 'sentence' or 'vocabulary'.\n\
- Reading: Pinyin for 'zh', Furigana for 'ja', Hangeul for Hanja in 'ko'.\n\
- Give every block a unique id, its 1-based page number and a confidence between 0 and 1.\n\
\n\
Task 2: Page summaries\n\
- For each individual page, list the sentences and vocabulary found on that page in `pageSummaries`.\n\
- Duplicates across pages are allowed here.\n\
\n\
Task 3: Aggregated global set\n\
- Build one inventory of all sentences and vocabulary across all pages in `aggregatedSet`.\n\
- Remove every exact duplicate: each sentence and each vocabulary item must appear once.\n\
\n\
Fill `summary` with the total number of blocks and the number of pages.\n\
Return everything in the specified JSON structure.";

/// Output schema declared to the service, mirroring `domain::Payload` field for field.
pub fn payload_response_schema() -> Value {
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });

    json!({
        "type": "OBJECT",
        "properties": {
            "results": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "original": { "type": "STRING" },
                        "reading": { "type": "STRING" },
                        "language": { "type": "STRING", "enum": ["zh", "ja", "ko"] },
                        "type": { "type": "STRING", "enum": ["sentence", "vocabulary"] },
                        "page": { "type": "INTEGER" },
                        "confidence": { "type": "NUMBER" }
                    },
                    "required": ["id", "original", "reading", "language", "type", "confidence"]
                }
            },
            "pageSummaries": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "page": { "type": "INTEGER" },
                        "sentences": string_list,
                        "vocabulary": string_list
                    },
                    "required": ["page", "sentences", "vocabulary"]
                }
            },
            "aggregatedSet": {
                "type": "OBJECT",
                "properties": {
                    "sentences": string_list,
                    "vocabulary": string_list
                },
                "required": ["sentences", "vocabulary"]
            },
            "summary": {
                "type": "OBJECT",
                "properties": {
                    "totalBlocks": { "type": "INTEGER" },
                    "pageCount": { "type": "INTEGER" }
                },
                "required": ["totalBlocks", "pageCount"]
            }
        },
        "required": ["results", "pageSummaries", "aggregatedSet", "summary"]
    })
}
