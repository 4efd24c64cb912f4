//! # Lathe Path Parser (Pure Rust)
//!
//! Parses the profile path the curve editor produces into cubic Bezier
//! segments ready for flattening.
//! No C dependencies - compiles directly to WASM.
//!
//! ## Architecture
//!
//! ```text
//! Path Text → Lexer → Tokens → Parser → Points → ProfilePath (normalized)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lathe_parser::parse_path;
//!
//! let path = parse_path("M0 0C0 0 10 0 10 10").unwrap();
//! assert_eq!(path.segment_count(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the lathe pipeline:
//!
//! ```text
//! lathe-parser → lathe-mesh → lathe-wasm
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod profile;
pub mod span;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use profile::{BezierSegment, ProfilePath};
pub use span::{Position, Span};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse a profile path string into a normalized [`ProfilePath`].
///
/// After parsing, the path is translated so its smallest x is 0 and its
/// y range is centered on 0 (see [`ProfilePath::normalized`]).
///
/// ## Errors
///
/// Returns a [`ParseError`] for unknown command letters, unparseable
/// numbers, a missing or repeated moveto, unfinished point groups and
/// paths with fewer than four points.
///
/// ## Example
///
/// ```rust
/// use lathe_parser::{parse_path, ParseErrorKind};
///
/// let err = parse_path("X0 0").unwrap_err();
/// assert!(matches!(err.kind, ParseErrorKind::UnknownCommand { command: 'X' }));
/// ```
pub fn parse_path(source: &str) -> Result<ProfilePath, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize();
    let points = parser::Parser::new(tokens).parse()?;
    let path = ProfilePath::from_points(&points).normalized();
    log::debug!(
        "parsed profile path: {} point(s), {} segment(s)",
        points.len(),
        path.segment_count()
    );
    Ok(path)
}

// =============================================================================
// TESTS
// =============================================================================
