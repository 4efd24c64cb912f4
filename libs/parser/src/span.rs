//! # Source Spans
//!
//! Byte/line/column positions for tokens and parse errors.
//!
//! ## Example
//!
//! ```rust
//! use lathe_parser::span::Span;
//!
//! let span = Span::from_bytes(2, 6);
//! assert_eq!(span.start.byte, 2);
//! assert_eq!(span.len(), 4);
//! ```

// =============================================================================
// POSITION
// =============================================================================

/// A position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset (0-indexed).
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span from two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a single-line span from byte offsets.
    ///
    /// Line is 0 and column equals the byte offset, which is exact for the
    /// ASCII path language.
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self {
            start: Position::new(start, 0, start),
            end: Position::new(end, 0, end),
        }
    }

    /// Empty span at the start of the source.
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// True if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both spans.
    pub fn merge(&self, other: &Span) -> Span {
        let start = if other.start.byte < self.start.byte { other.start } else { self.start };
        let end = if other.end.byte > self.end.byte { other.end } else { self.end };
        Span::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::from_bytes(3, 7).len(), 4);
        assert!(Span::zero().is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::from_bytes(5, 8).merge(&Span::from_bytes(1, 3));
        assert_eq!(merged.start.byte, 1);
        assert_eq!(merged.end.byte, 8);
    }
}
