use bytes::Bytes;
use chrono::Utc;

use crate::application::ports::RecognitionClient;
use crate::domain::{ActiveView, MediaType, Payload, SessionPhase, SourceDocument};

use super::export_encoder::{self, ExportArtifact, ExportError, ExportFormat};
use super::extraction_service::{ExtractionError, ExtractionService};
use super::view_projector::{self, ProjectedViews};

/// Holds the current document and at most one payload, and owns every
/// transition between them.
///
/// ```text
/// Empty --load--> DocumentLoaded --extract--> Processing --> Ready | Failed
/// Ready | Failed --extract--> Processing
/// any --reset--> Empty
/// ```
///
/// `extract` borrows the session mutably for the whole recognition call, so
/// a second extraction cannot start while one is in flight. Dropping the
/// `extract` future cancels it and puts the session back in `DocumentLoaded`.
pub struct Session<R>
where
    R: RecognitionClient + ?Sized,
{
    extraction: ExtractionService<R>,
    phase: SessionPhase,
    document: Option<SourceDocument>,
    payload: Option<Payload>,
    error_message: Option<String>,
    active_view: ActiveView,
}

impl<R> Session<R>
where
    R: RecognitionClient + ?Sized,
{
    pub fn new(extraction: ExtractionService<R>) -> Self {
        Self {
            extraction,
            phase: SessionPhase::Empty,
            document: None,
            payload: None,
            error_message: None,
            active_view: ActiveView::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn document(&self) -> Option<&SourceDocument> {
        self.document.as_ref()
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn load(
        &mut self,
        filename: impl Into<String>,
        declared_media_type: &str,
        data: Bytes,
    ) -> Result<&SourceDocument, SessionError> {
        if self.phase != SessionPhase::Empty {
            return Err(SessionError::InvalidTransition {
                phase: self.phase,
                action: "load",
            });
        }

        let media_type = MediaType::from_mime(declared_media_type).ok_or_else(|| {
            tracing::warn!(media_type = declared_media_type, "Rejected document");
            ExtractionError::UnsupportedFormat(declared_media_type.to_string())
        })?;

        let document = SourceDocument::new(filename.into(), media_type, data);
        tracing::info!(
            document_id = %document.id,
            filename = %document.filename,
            media_type = %document.media_type,
            info = %document.describe(),
            "Document loaded"
        );

        self.phase = SessionPhase::DocumentLoaded;
        self.error_message = None;
        Ok(self.document.insert(document))
    }

    /// Runs one extraction for the loaded document. On failure the session
    /// keeps the document (and any earlier payload) so the caller can retry.
    pub async fn extract(&mut self) -> Result<(), SessionError> {
        let Self {
            extraction,
            phase,
            document,
            payload,
            error_message,
            ..
        } = self;

        let document = match document.as_ref() {
            Some(document) if phase.can_extract() => document,
            _ => {
                return Err(SessionError::InvalidTransition {
                    phase: *phase,
                    action: "extract",
                });
            }
        };

        *error_message = None;
        let guard = ProcessingGuard::enter(phase);

        match extraction
            .extract(&document.data, document.media_type.as_mime())
            .await
        {
            Ok(extracted) => {
                *payload = Some(extracted);
                guard.settle(SessionPhase::Ready);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    document_id = %document.id,
                    error = %err,
                    "Extraction failed"
                );
                *error_message = Some(err.display_message());
                guard.settle(SessionPhase::Failed);
                Err(err.into())
            }
        }
    }

    /// Clears document, payload and error. Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.phase != SessionPhase::Empty;
        self.phase = SessionPhase::Empty;
        self.document = None;
        self.payload = None;
        self.error_message = None;
        self.active_view = ActiveView::default();
        changed
    }

    pub fn views(&self) -> Result<ProjectedViews, SessionError> {
        let payload = self.payload.as_ref().ok_or(ExportError::NoDataAvailable)?;
        Ok(view_projector::project(payload))
    }

    /// Encodes the held payload for the active view, stamped with the current time.
    pub fn export(&self, format: ExportFormat) -> Result<ExportArtifact, SessionError> {
        let artifact =
            export_encoder::encode(self.payload.as_ref(), self.active_view, format, Utc::now())?;
        Ok(artifact)
    }
}

/// Marks the session as processing and puts it back to `DocumentLoaded`
/// unless settled before being dropped.
struct ProcessingGuard<'a> {
    phase: &'a mut SessionPhase,
    settled: bool,
}

impl<'a> ProcessingGuard<'a> {
    fn enter(phase: &'a mut SessionPhase) -> Self {
        *phase = SessionPhase::Processing;
        Self {
            phase,
            settled: false,
        }
    }

    fn settle(mut self, outcome: SessionPhase) {
        *self.phase = outcome;
        self.settled = true;
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::info!("Extraction cancelled before completion");
            *self.phase = SessionPhase::DocumentLoaded;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("cannot {action} while session is {phase}")]
    InvalidTransition {
        phase: SessionPhase,
        action: &'static str,
    },
}
