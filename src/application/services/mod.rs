mod export_encoder;
mod extraction_service;
mod extraction_task;
mod session;
pub mod view_projector;

pub use export_encoder::{
    CSV_HEADER, CSV_SEPARATOR_ROW, ExportArtifact, ExportError, ExportFormat, csv_table, encode,
    json_snapshot, text_digest,
};
pub use extraction_service::{
    DEFAULT_RECOGNITION_TIMEOUT, ExtractionError, ExtractionService, GENERIC_FAILURE_MESSAGE,
    UNSUPPORTED_FORMAT_MESSAGE,
};
pub use extraction_task::{EXTRACTION_INSTRUCTIONS, payload_response_schema};
pub use session::{Session, SessionError};
pub use view_projector::{
    BlockCard, GlobalSection, GlobalSetView, PageBreakdown, PageFeedView, PageSummaryView,
    ProjectedViews, SetCategory, project,
};
