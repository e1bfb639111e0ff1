use std::fmt;

/// Lifecycle of a session. See `Session` for the allowed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Empty,
    DocumentLoaded,
    Processing,
    Ready,
    Failed,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Empty => "EMPTY",
            SessionPhase::DocumentLoaded => "DOCUMENT_LOADED",
            SessionPhase::Processing => "PROCESSING",
            SessionPhase::Ready => "READY",
            SessionPhase::Failed => "FAILED",
        }
    }

    pub fn can_extract(&self) -> bool {
        matches!(
            self,
            SessionPhase::DocumentLoaded | SessionPhase::Ready | SessionPhase::Failed
        )
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
