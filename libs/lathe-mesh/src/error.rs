//! # Lathe Errors
//!
//! Error types for the lathe pipeline. Every failure aborts the whole
//! invocation; no stage substitutes a default for invalid input.

use lathe_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while generating a lathe mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatheError {
    /// The path string could not be parsed
    #[error("Malformed path: {0}")]
    MalformedPath(#[from] ParseError),

    /// A revolution parameter or the profile is outside the valid domain
    #[error("Invalid parameter: {message}")]
    Parameter { message: String },

    /// An upstream stage produced inconsistent data
    #[error("Internal invariant violated: {message}")]
    InternalInvariant { message: String },
}

/// Error category without details, for callers that only classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LatheError::MalformedPath`].
    MalformedPath,
    /// See [`LatheError::Parameter`].
    Parameter,
    /// See [`LatheError::InternalInvariant`].
    InternalInvariant,
}

impl LatheError {
    /// Creates a parameter error.
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter {
            message: message.into(),
        }
    }

    /// Creates an internal invariant error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InternalInvariant {
            message: message.into(),
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedPath(_) => ErrorKind::MalformedPath,
            Self::Parameter { .. } => ErrorKind::Parameter,
            Self::InternalInvariant { .. } => ErrorKind::InternalInvariant,
        }
    }

    /// Byte offset into the path string, for malformed paths.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::MalformedPath(err) => Some(err.position()),
            _ => None,
        }
    }
}
