//! WASM-compatible diagnostics.
//!
//! Classifies pipeline failures for the editor, with the byte offset into
//! the path string when the path itself was at fault.

use lathe_mesh::{ErrorKind, LatheError};
use std::fmt;
use wasm_bindgen::prelude::*;

/// Failure category for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    MalformedPath,
    Parameter,
    InternalInvariant,
}

impl From<ErrorKind> for DiagnosticKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::MalformedPath => DiagnosticKind::MalformedPath,
            ErrorKind::Parameter => DiagnosticKind::Parameter,
            ErrorKind::InternalInvariant => DiagnosticKind::InternalInvariant,
        }
    }
}

/// A pipeline failure for JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try { lathe("X0 0", "{}"); }
/// // catch (diag) { console.log(diag.kind, diag.message, diag.position); }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
    position: Option<u32>,
}

#[wasm_bindgen]
impl Diagnostic {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Byte offset into the path string, for malformed paths.
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> Option<u32> {
        self.position
    }
}

impl Diagnostic {
    /// A parameter failure that happened before the pipeline ran, such as
    /// unreadable parameter JSON.
    pub fn parameter(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Parameter,
            message: message.into(),
            position: None,
        }
    }
}

impl From<LatheError> for Diagnostic {
    fn from(err: LatheError) -> Self {
        Self {
            kind: err.kind().into(),
            position: err.position().map(|p| u32::try_from(p).unwrap_or(u32::MAX)),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Diagnostic {
    fn from(err: serde_json::Error) -> Self {
        Self::parameter(format!("Invalid parameters: {err}"))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
