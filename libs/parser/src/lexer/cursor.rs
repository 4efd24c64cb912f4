//! # Character Cursor
//!
//! Peekable character cursor for the path lexer.
//! Tracks position (byte, line, column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use lathe_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("M0 0");
//! assert_eq!(cursor.peek(), Some('M'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('0'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (0-indexed).
    line: usize,
    /// Current column (0-indexed).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Current position (byte, line, column).
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Peek one character past the current one.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use lathe_parser::lexer::Cursor;
    ///
    /// let cursor = Cursor::new("e-5");
    /// assert_eq!(cursor.peek_next(), Some('-'));
    /// ```
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.byte..].chars();
        chars.next();
        chars.next()
    }

    /// Peek two characters past the current one.
    pub fn peek_second(&self) -> Option<char> {
        self.source[self.byte..].chars().nth(2)
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use lathe_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("125,4");
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.peek(), Some(','));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text between a previous position and the cursor.
    pub fn slice_from(&self, start: Position) -> &'a str {
        &self.source[start.byte..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================
