//! Error types for nested-value operations.

use thiserror::Error;

/// Structured error types for nested-value operations.
///
/// Most operations in this module are total: missing data yields `None` or
/// a caller-supplied default. These variants cover the few genuinely invalid
/// arguments.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// Invalid path for a mutation (e.g. empty path passed to `try_set`)
    #[error("invalid path: {path}")]
    InvalidPath { path: String },

    /// Type mismatch during a typed lookup or conversion
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ValueError {
    /// Check if this error is a path validation failure.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, ValueError::InvalidPath { .. })
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
