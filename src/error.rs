//! Error types for seo-audit.
//!
//! The on-page rule engine itself is infallible; errors only arise at the
//! collaborator boundaries (evaluator response decoding, history storage)
//! and are recovered there before reaching callers.

/// Error type for audit collaborator operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Evaluator response did not decode against the report schema.
    #[error("evaluator response decoding failed: {0}")]
    EvaluatorResponse(String),

    /// Stored history could not be deserialized.
    #[error("history deserialization failed: {0}")]
    HistoryCorrupt(String),

    /// History could not be serialized for storage.
    #[error("history serialization failed: {0}")]
    HistorySerialize(String),

    /// External evaluator call failed (network, timeout, transport).
    #[error("evaluator call failed: {0}")]
    EvaluatorUnavailable(String),
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, Error>;
