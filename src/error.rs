//! Error types for btdiff.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::compare::CompareError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for btdiff operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum BtDiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The XML document could not be parsed into behavior trees.
    #[error("XML parse error: {0}")]
    ParseError(String),

    /// A requested tree does not exist in one of the documents.
    #[error("tree '{name}' not found in {side} document")]
    TreeNotFound { name: String, side: &'static str },

    /// An input tree violates the diff engine's preconditions.
    #[error("invalid tree: {0}")]
    PreconditionViolation(#[from] CompareError),

    /// File access failed.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BtDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BtDiffError::UserError(_) => exit_codes::USER_ERROR,
            BtDiffError::TreeNotFound { .. } => exit_codes::USER_ERROR,
            BtDiffError::ParseError(_) => exit_codes::PARSE_FAILURE,
            BtDiffError::Io { .. } => exit_codes::PARSE_FAILURE,
            BtDiffError::PreconditionViolation(_) => exit_codes::PRECONDITION_FAILURE,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for BtDiffError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        BtDiffError::ParseError(format!("bad attribute: {}", err))
    }
}

/// Result type alias for btdiff operations.
pub type Result<T> = std::result::Result<T, BtDiffError>;
