//!
//! Dotnest: dot-notation access and transforms for nested in-memory data.
//!
//! ## Core Concepts
//!
//! The crate is built around a small set of pieces:
//!
//! * **Values (`value::Value`)**: the universal JSON-like data shape — scalars, ordered lists, and string-keyed maps.
//! * **Maps (`value::Map`)**: insertion-ordered containers supporting dot-notation access and mutation (`get`, `set`, `has`, `forget`, `pull`, ...).
//! * **Paths (`value::Path` / `value::PathBuf`)**: `.`-separated segment strings addressing locations inside nested structures, built ergonomically with the [`path!`] macro.
//! * **Sequence transforms (`seq`)**: pure functions over `&[Value]` — `collapse`, `flatten`, `pluck`, `average`, `sort`, and friends.
//! * **XML conversion (`xml`)**: fail-soft conversion of markup documents into nested values.
//! * **Text helpers (`text`)**: stop-word removal and punctuation stripping with injectable word/symbol sets.
//!
//! Everything is synchronous and stateless: no operation performs I/O, and
//! the only in-place mutation is the explicitly documented `&mut self`
//! surface on `Map`.

pub mod seq;
pub mod text;
pub mod value;
pub mod xml;

/// Re-export the core container types for easier access.
pub use value::{Map, Value};

/// Result type used throughout the dotnest library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotnest library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Structured nested-value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured sequence-transform errors from the seq module
    #[error(transparent)]
    Seq(seq::SeqError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Seq(_) => "seq",
        }
    }

    /// Check if this error indicates an invalid argument (bad path, wrong
    /// type, or an empty sequence fed to an aggregate).
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Value(err) => err.is_invalid_path() || err.is_type_error(),
            Error::Seq(err) => err.is_empty_sequence(),
        }
    }
}
