//! # Parse Errors
//!
//! Error types for the profile path parser. Every kind here means the path
//! string is malformed.
//!
//! ## Example
//!
//! ```rust
//! use lathe_parser::error::ParseError;
//!
//! let error = ParseError::unknown_command('X');
//! assert!(error.to_string().contains("'X'"));
//! ```

use crate::span::Span;
use std::fmt;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create an unknown command error.
    pub fn unknown_command(command: char) -> Self {
        Self::new(ParseErrorKind::UnknownCommand { command }, Span::zero())
    }

    /// Create an invalid number error.
    pub fn invalid_number(text: &str) -> Self {
        Self::new(
            ParseErrorKind::InvalidNumber {
                text: text.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create a too-few-points error.
    pub fn too_few_points(count: usize, min: usize) -> Self {
        Self::new(ParseErrorKind::TooFewPoints { count, min }, Span::zero())
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Byte offset where the error was detected.
    pub fn position(&self) -> usize {
        self.span.start.byte
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.span.start.byte)
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A letter other than `M`, `m`, `C` or `c`.
    UnknownCommand {
        /// The offending letter.
        command: char,
    },

    /// A numeric token that does not parse to a finite number.
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Coordinates or a curveto appeared before the moveto.
    MissingMoveTo,

    /// A second moveto; profiles are a single open curve.
    RepeatedMoveTo,

    /// More than one point followed the moveto.
    UnexpectedCoordinate,

    /// A command ended in the middle of a point or cubic group.
    IncompleteSegment {
        /// Number of coordinates given for the unfinished group.
        coordinates: usize,
    },

    /// Not enough points for a single cubic segment.
    TooFewPoints {
        /// Points found.
        count: usize,
        /// Points required.
        min: usize,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { command } => {
                write!(f, "unknown path command '{}'", command)
            }
            Self::InvalidNumber { text } => {
                write!(f, "invalid number '{}'", text)
            }
            Self::MissingMoveTo => {
                write!(f, "path must begin with a moveto")
            }
            Self::RepeatedMoveTo => {
                write!(f, "profile path may contain only one moveto")
            }
            Self::UnexpectedCoordinate => {
                write!(f, "moveto takes exactly one point")
            }
            Self::IncompleteSegment { coordinates } => {
                write!(f, "incomplete command ({} coordinate(s) given)", coordinates)
            }
            Self::TooFewPoints { count, min } => {
                write!(f, "path has {} point(s), at least {} required", count, min)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_display() {
        let msg = ParseError::unknown_command('L').to_string();
        assert!(msg.contains("unknown path command 'L'"));
        assert!(msg.contains("at byte 0"));
    }

    #[test]
    fn test_too_few_points_display() {
        let msg = ParseError::too_few_points(1, 4).to_string();
        assert!(msg.contains("1 point(s)"));
        assert!(msg.contains("at least 4"));
    }

    #[test]
    fn test_error_with_span() {
        let error = ParseError::invalid_number("-").with_span(Span::from_bytes(10, 11));
        assert_eq!(error.position(), 10);
    }
}
