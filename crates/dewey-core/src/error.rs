//! # Error Types
//!
//! Every fallible operation in the crate returns [`DeweyError`]. Errors are
//! surfaced to the caller as-is; nothing is retried and no partial result is
//! ever produced.

use thiserror::Error;

/// Top-level error type for call-number operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeweyError {
    /// The input does not satisfy the minimum call-number grammar, or a
    /// classification could not be read as a number.
    #[error("malformed Dewey Decimal call number {input:?}: {reason}")]
    MalformedInput {
        /// The offending input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A comparison operator outside `>`, `>=`, `<`, `<=`, `==`, `===`.
    #[error("invalid operator: [{0}]")]
    InvalidOperator(String),

    /// A range configuration failed validation or could not be decoded.
    #[error("invalid range configuration: {0}")]
    Config(String),
}

impl DeweyError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
