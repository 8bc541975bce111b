//! Error types for surface-to-policy compilation.

use thiserror::Error;

/// Errors that can occur while compiling a surface document.
///
/// Every variant is fatal: the first violation encountered aborts the run,
/// so a policy document is either generated whole or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// The top-level input value is not a JSON object.
    #[error("surface document is not a JSON object")]
    InvalidDocument,

    /// The `schema` field does not carry the expected surface literal.
    #[error("unexpected surface schema: {found}")]
    SchemaMismatch {
        /// The schema string found in the document, empty if absent.
        found: String,
    },

    /// The `entries` field is absent or not an array.
    #[error("surface document has no entries array")]
    MissingEntries,

    /// An entry is not an object, or its fields have the wrong type.
    #[error("malformed entry at index {index}: {reason}")]
    MalformedEntry {
        /// Position of the offending entry in the input sequence.
        index: usize,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A module from the required list never appears in the surface.
    #[error("ANKA required module missing from surface: {0}")]
    MissingRequiredModule(String),

    /// A required module appears but carries no exports.
    #[error("ANKA required module has empty exports in surface: {0}")]
    EmptyRequiredModule(String),
}

/// Result alias used throughout the compilation pipeline.
pub type CompileResult<T> = Result<T, CompileError>;
