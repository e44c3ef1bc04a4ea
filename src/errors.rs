use thiserror::Error;

/// Errors raised at the boundary where host-framework payloads are
/// mapped into typed records. The summarization pipeline itself is
/// total and never fails.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to map content payload: {0}")]
    InvalidRecord(String),
}
