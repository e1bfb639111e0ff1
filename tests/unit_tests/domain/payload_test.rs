use cjk_lens::domain::{BlockKind, Language, Payload, PayloadError};

use crate::helpers::{SCENARIO_JSON, scenario_payload};

fn payload_json(results: &str, aggregated: &str) -> String {
    format!(
        r#"{{
            "results": [{results}],
            "pageSummaries": [],
            "aggregatedSet": {aggregated},
            "summary": {{ "totalBlocks": 0, "pageCount": 0 }}
        }}"#
    )
}

const EMPTY_SET: &str = r#"{ "sentences": [], "vocabulary": [] }"#;

#[test]
fn given_scenario_json_when_parsing_then_matches_expected_payload() {
    let payload = Payload::from_json(SCENARIO_JSON).unwrap();

    assert_eq!(payload, scenario_payload());
}

#[test]
fn given_block_without_page_when_parsing_then_page_defaults_to_one() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "reading": "shuǐ", "language": "zh", "type": "vocabulary", "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    let payload = Payload::from_json(&json).unwrap();

    assert_eq!(payload.results[0].page, 1);
}

#[test]
fn given_block_without_reading_when_parsing_then_reading_is_empty() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "language": "ja", "type": "vocabulary", "page": 2, "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    let payload = Payload::from_json(&json).unwrap();

    assert!(payload.results[0].reading.is_empty());
    assert!(!payload.results[0].has_reading());
}

#[test]
fn given_zero_page_when_parsing_then_rejects_payload() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "reading": "", "language": "zh", "type": "vocabulary", "page": 0, "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    let result = Payload::from_json(&json);

    assert!(matches!(result, Err(PayloadError::ZeroPage { .. })));
}

#[test]
fn given_negative_page_when_parsing_then_rejects_payload() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "reading": "", "language": "zh", "type": "vocabulary", "page": -3, "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    let result = Payload::from_json(&json);

    assert!(matches!(result, Err(PayloadError::Parse(_))));
}

#[test]
fn given_confidence_above_one_when_parsing_then_rejects_payload() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "reading": "", "language": "zh", "type": "vocabulary", "confidence": 1.2 }"#,
        EMPTY_SET,
    );

    let result = Payload::from_json(&json);

    assert!(matches!(
        result,
        Err(PayloadError::ConfidenceOutOfRange { .. })
    ));
}

#[test]
fn given_duplicate_block_ids_when_parsing_then_rejects_payload() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "language": "zh", "type": "vocabulary", "confidence": 0.5 },
           { "id": "b1", "original": "火", "language": "zh", "type": "vocabulary", "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    let result = Payload::from_json(&json);

    assert!(matches!(result, Err(PayloadError::DuplicateBlockId(id)) if id == "b1"));
}

#[test]
fn given_duplicate_global_vocabulary_when_parsing_then_rejects_payload() {
    let json = payload_json("", r#"{ "sentences": ["你好"], "vocabulary": ["水", "水"] }"#);

    let result = Payload::from_json(&json);

    assert!(matches!(result, Err(PayloadError::DuplicateVocabulary(v)) if v == "水"));
}

#[test]
fn given_duplicate_global_sentences_when_parsing_then_rejects_payload() {
    let json = payload_json("", r#"{ "sentences": ["你好", "你好"], "vocabulary": [] }"#);

    let result = Payload::from_json(&json);

    assert!(matches!(result, Err(PayloadError::DuplicateSentence(_))));
}

#[test]
fn given_unknown_language_when_parsing_then_rejects_payload() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "hello", "language": "en", "type": "sentence", "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    assert!(matches!(
        Payload::from_json(&json),
        Err(PayloadError::Parse(_))
    ));
}

#[test]
fn given_word_type_tag_when_parsing_then_maps_to_vocabulary() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "学校", "reading": "がっこう", "language": "ja", "type": "word", "confidence": 0.8 }"#,
        EMPTY_SET,
    );

    let payload = Payload::from_json(&json).unwrap();

    assert_eq!(payload.results[0].kind, BlockKind::Vocabulary);
    assert_eq!(payload.results[0].language, Language::Ja);
}

#[test]
fn given_missing_aggregated_set_when_parsing_then_rejects_payload() {
    let json = r#"{ "results": [], "pageSummaries": [], "summary": { "totalBlocks": 0, "pageCount": 0 } }"#;

    assert!(matches!(
        Payload::from_json(json),
        Err(PayloadError::Parse(_))
    ));
}

#[test]
fn given_missing_page_summaries_when_parsing_then_rejects_payload() {
    let json = r#"{
        "results": [],
        "aggregatedSet": { "sentences": [], "vocabulary": [] },
        "summary": { "totalBlocks": 0, "pageCount": 0 }
    }"#;

    assert!(matches!(
        Payload::from_json(json),
        Err(PayloadError::Parse(_))
    ));
}

#[test]
fn given_empty_aggregated_set_object_when_parsing_then_rejects_payload() {
    let json = payload_json("", "{}");

    assert!(matches!(
        Payload::from_json(&json),
        Err(PayloadError::Parse(_))
    ));
}

#[test]
fn given_aggregated_set_without_vocabulary_when_parsing_then_rejects_payload() {
    let json = payload_json("", r#"{ "sentences": ["你好"] }"#);

    assert!(matches!(
        Payload::from_json(&json),
        Err(PayloadError::Parse(_))
    ));
}

#[test]
fn given_null_page_and_reading_when_parsing_then_block_is_accepted_with_defaults() {
    let json = payload_json(
        r#"{ "id": "b1", "original": "水", "reading": null, "language": "zh", "type": "vocabulary", "page": null, "confidence": 0.5 }"#,
        EMPTY_SET,
    );

    let payload = Payload::from_json(&json).unwrap();

    assert_eq!(payload.results[0].page, 1);
    assert!(payload.results[0].reading.is_empty());
}

#[test]
fn given_non_json_text_when_parsing_then_rejects_payload() {
    assert!(matches!(
        Payload::from_json("Sorry, I cannot read this document."),
        Err(PayloadError::Parse(_))
    ));
}

#[test]
fn given_total_blocks_mismatch_when_parsing_then_accepts_payload_as_is() {
    let json = r#"{
        "results": [],
        "pageSummaries": [],
        "aggregatedSet": { "sentences": [], "vocabulary": [] },
        "summary": { "totalBlocks": 42, "pageCount": 3 }
    }"#;

    let payload = Payload::from_json(json).unwrap();

    assert!(payload.results.is_empty());
    assert_eq!(payload.summary.total_blocks, 42);
}

#[test]
fn given_page_summaries_disagreeing_with_blocks_when_parsing_then_both_are_kept() {
    let json = r#"{
        "results": [
            { "id": "b1", "original": "你好", "language": "zh", "type": "sentence", "page": 1, "confidence": 0.9 }
        ],
        "pageSummaries": [ { "page": 2, "sentences": ["再见"], "vocabulary": ["水"] } ],
        "aggregatedSet": { "sentences": ["你好"], "vocabulary": [] },
        "summary": { "totalBlocks": 1, "pageCount": 1 }
    }"#;

    let payload = Payload::from_json(json).unwrap();

    assert_eq!(payload.results[0].page, 1);
    assert_eq!(payload.page_summaries[0].page, 2);
    assert_eq!(payload.page_summaries[0].sentences, vec!["再见".to_string()]);
}

#[test]
fn given_payload_when_serialized_and_parsed_back_then_is_field_for_field_equal() {
    let original = Payload::from_json(cjk_lens::infrastructure::llm::SAMPLE_PAYLOAD).unwrap();

    let encoded = serde_json::to_string(&original).unwrap();
    let decoded = Payload::from_json(&encoded).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn given_payload_when_serialized_then_block_kind_is_written_as_type() {
    let value = serde_json::to_value(scenario_payload()).unwrap();

    assert_eq!(value["results"][0]["type"], "sentence");
    assert!(value.get("pageSummaries").is_some());
    assert_eq!(value["summary"]["totalBlocks"], 1);
}
