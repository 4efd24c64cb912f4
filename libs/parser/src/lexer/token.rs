//! # Tokens
//!
//! Token types for the path lexer.
//!
//! ## Example
//!
//! ```rust
//! use lathe_parser::lexer::{Token, TokenKind};
//! use lathe_parser::span::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::from_bytes(0, 2), "10".to_string());
//! assert_eq!(token.kind, TokenKind::Number);
//! ```

use crate::span::Span;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is EOF.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens in the path language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `M`: absolute moveto
    MoveTo,
    /// `m`: relative moveto
    MoveToRelative,
    /// `C`: absolute cubic curveto
    CurveTo,
    /// `c`: relative cubic curveto
    CurveToRelative,
    /// Numeric literal like `10`, `-3.5` or `1e-2`
    Number,
    /// Any other letter
    Unknown,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Maps a command letter to its token kind.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use lathe_parser::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::command('c'), TokenKind::CurveToRelative);
    /// assert_eq!(TokenKind::command('L'), TokenKind::Unknown);
    /// ```
    pub fn command(letter: char) -> Self {
        match letter {
            'M' => Self::MoveTo,
            'm' => Self::MoveToRelative,
            'C' => Self::CurveTo,
            'c' => Self::CurveToRelative,
            _ => Self::Unknown,
        }
    }

    /// True for moveto and curveto tokens.
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            Self::MoveTo | Self::MoveToRelative | Self::CurveTo | Self::CurveToRelative
        )
    }

    /// True for lowercase (relative) commands.
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::MoveToRelative | Self::CurveToRelative)
    }
}
