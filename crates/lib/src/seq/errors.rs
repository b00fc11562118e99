//! Error types for sequence transforms.

use thiserror::Error;

/// Structured error types for sequence transforms.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    /// An aggregate was asked of an empty sequence (e.g. `average`)
    #[error("cannot compute {operation} of an empty sequence")]
    EmptySequence { operation: String },
}

impl SeqError {
    /// Check if this error is an empty-sequence failure.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, SeqError::EmptySequence { .. })
    }
}

impl From<SeqError> for crate::Error {
    fn from(err: SeqError) -> Self {
        crate::Error::Seq(err)
    }
}
