mod active_view;
mod aggregated_set;
mod block;
mod document_id;
mod media_type;
mod page_summary;
mod payload;
mod session_phase;
mod source_document;

pub use active_view::ActiveView;
pub use aggregated_set::AggregatedSet;
pub use block::{Block, BlockKind, Language};
pub use document_id::DocumentId;
pub use media_type::MediaType;
pub use page_summary::PageSummary;
pub use payload::{Payload, PayloadError, PayloadSummary};
pub use session_phase::SessionPhase;
pub use source_document::SourceDocument;
