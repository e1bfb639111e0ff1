use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use cjk_lens::application::ports::RecognitionClient;
use cjk_lens::application::services::{
    ExportError, ExportFormat, ExtractionError, ExtractionService, Session, SessionError,
};
use cjk_lens::domain::{ActiveView, SessionPhase};
use cjk_lens::infrastructure::llm::MockRecognitionClient;

use crate::helpers::{
    FailingRecognitionClient, PendingRecognitionClient, SCENARIO_JSON, ScriptedRecognitionClient,
    scenario_payload,
};

fn session_with<R: RecognitionClient + 'static>(client: R) -> Session<R> {
    Session::new(ExtractionService::new(Arc::new(client)))
}

fn load_pdf<R: RecognitionClient + ?Sized>(session: &mut Session<R>) {
    session
        .load("lesson.pdf", "application/pdf", Bytes::from_static(b"%PDF-1.7"))
        .unwrap();
}

#[test]
fn given_empty_session_when_loading_text_plain_then_stays_empty_with_unsupported_format() {
    let mut session = session_with(MockRecognitionClient::new());

    let result = session.load("notes.txt", "text/plain", Bytes::from_static(b"hi"));

    assert!(matches!(
        result,
        Err(SessionError::Extraction(ExtractionError::UnsupportedFormat(_)))
    ));
    assert_eq!(session.phase(), SessionPhase::Empty);
    assert!(session.document().is_none());
}

#[test]
fn given_empty_session_when_loading_pdf_then_document_is_loaded() {
    let mut session = session_with(MockRecognitionClient::new());

    let document = session
        .load("lesson.pdf", "application/pdf", Bytes::from_static(b"%PDF"))
        .unwrap();

    assert_eq!(document.filename, "lesson.pdf");
    assert_eq!(session.phase(), SessionPhase::DocumentLoaded);
}

#[test]
fn given_loaded_session_when_loading_again_then_rejects_transition() {
    let mut session = session_with(MockRecognitionClient::new());
    load_pdf(&mut session);

    let result = session.load("other.png", "image/png", Bytes::new());

    assert!(matches!(
        result,
        Err(SessionError::InvalidTransition {
            phase: SessionPhase::DocumentLoaded,
            action: "load"
        })
    ));
    assert_eq!(session.document().unwrap().filename, "lesson.pdf");
}

#[tokio::test]
async fn given_empty_session_when_extracting_then_rejects_transition() {
    let mut session = session_with(MockRecognitionClient::new());

    let result = session.extract().await;

    assert!(matches!(
        result,
        Err(SessionError::InvalidTransition {
            phase: SessionPhase::Empty,
            ..
        })
    ));
}

#[tokio::test]
async fn given_loaded_session_when_extraction_succeeds_then_is_ready_with_payload() {
    let mut session = session_with(MockRecognitionClient::with_response(SCENARIO_JSON));
    load_pdf(&mut session);

    session.extract().await.unwrap();

    assert_eq!(session.phase(), SessionPhase::Ready);
    assert_eq!(session.payload(), Some(&scenario_payload()));
    assert!(session.error_message().is_none());
}

#[tokio::test]
async fn given_transport_timeout_when_extracting_then_fails_with_stored_message() {
    let mut session = session_with(FailingRecognitionClient::new("timeout"));
    load_pdf(&mut session);

    let result = session.extract().await;

    assert!(result.is_err());
    assert_eq!(session.phase(), SessionPhase::Failed);
    assert_eq!(session.error_message(), Some("timeout"));
    assert!(session.payload().is_none());
    assert_eq!(session.document().unwrap().filename, "lesson.pdf");
}

#[tokio::test]
async fn given_failed_session_when_retrying_then_reaches_ready_without_reloading() {
    let client = ScriptedRecognitionClient::new(vec![
        Err("service unavailable".to_string()),
        Ok(SCENARIO_JSON.to_string()),
    ]);
    let mut session = session_with(client);
    load_pdf(&mut session);

    assert!(session.extract().await.is_err());
    assert_eq!(session.phase(), SessionPhase::Failed);

    session.extract().await.unwrap();

    assert_eq!(session.phase(), SessionPhase::Ready);
    assert!(session.error_message().is_none());
}

#[tokio::test]
async fn given_ready_session_when_retry_fails_then_previous_payload_is_kept() {
    let client = ScriptedRecognitionClient::new(vec![
        Ok(SCENARIO_JSON.to_string()),
        Err("quota exceeded".to_string()),
    ]);
    let mut session = session_with(client);
    load_pdf(&mut session);
    session.extract().await.unwrap();

    assert!(session.extract().await.is_err());

    assert_eq!(session.phase(), SessionPhase::Failed);
    assert_eq!(session.error_message(), Some("quota exceeded"));
    assert_eq!(session.payload(), Some(&scenario_payload()));
}

#[tokio::test]
async fn given_in_flight_extraction_when_future_is_dropped_then_returns_to_document_loaded() {
    let mut session = session_with(PendingRecognitionClient);
    load_pdf(&mut session);

    let outcome = tokio::time::timeout(Duration::from_millis(20), session.extract()).await;

    assert!(outcome.is_err());
    assert_eq!(session.phase(), SessionPhase::DocumentLoaded);
    assert!(session.payload().is_none());
}

#[tokio::test]
async fn given_ready_session_when_resetting_then_everything_is_cleared() {
    let mut session = session_with(MockRecognitionClient::new());
    load_pdf(&mut session);
    session.extract().await.unwrap();
    session.select_view(ActiveView::GlobalSet);

    let changed = session.reset();

    assert!(changed);
    assert_eq!(session.phase(), SessionPhase::Empty);
    assert!(session.document().is_none());
    assert!(session.payload().is_none());
    assert_eq!(session.active_view(), ActiveView::PageFeed);
}

#[test]
fn given_empty_session_when_resetting_then_reports_no_change() {
    let mut session = session_with(MockRecognitionClient::new());

    assert!(!session.reset());
    assert_eq!(session.phase(), SessionPhase::Empty);
}

#[test]
fn given_no_payload_when_reading_views_or_exports_then_returns_no_data_available() {
    let mut session = session_with(MockRecognitionClient::new());
    load_pdf(&mut session);

    assert!(matches!(
        session.views(),
        Err(SessionError::Export(ExportError::NoDataAvailable))
    ));
    for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Csv] {
        assert!(matches!(
            session.export(format),
            Err(SessionError::Export(ExportError::NoDataAvailable))
        ));
    }
}

#[tokio::test]
async fn given_selected_view_when_exporting_text_then_digest_follows_view() {
    let mut session = session_with(MockRecognitionClient::with_response(SCENARIO_JSON));
    load_pdf(&mut session);
    session.extract().await.unwrap();

    let feed = session.export(ExportFormat::Text).unwrap();
    session.select_view(ActiveView::GlobalSet);
    let set = session.export(ExportFormat::Text).unwrap();

    assert_eq!(feed.body, "[Page 1] 你好 (nǐ hǎo)");
    assert_eq!(
        set.body,
        "=== GLOBAL UNIQUE SENTENCES ===\n你好\n\n=== GLOBAL UNIQUE VOCABULARY ===\n"
    );
}

#[tokio::test]
async fn given_ready_session_when_projecting_views_then_exports_do_not_mutate_payload() {
    let mut session = session_with(MockRecognitionClient::new());
    load_pdf(&mut session);
    session.extract().await.unwrap();
    let before = session.payload().cloned();

    let views = session.views().unwrap();
    session.export(ExportFormat::Csv).unwrap();
    session.export(ExportFormat::Json).unwrap();

    assert_eq!(session.payload().cloned(), before);
    assert_eq!(views.page_feed.cards.len(), 3);
    assert_eq!(views.page_summary.pages.len(), 2);
}
