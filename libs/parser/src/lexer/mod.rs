//! # Path Lexer
//!
//! Tokenizes a profile path string into command letters and numbers.
//!
//! The path language is the moveto/cubic subset of SVG path data:
//! `M`/`m` followed by one point, then `C`/`c` groups of three points.
//! Whitespace, commas and any other punctuation only separate numbers.
//!
//! ## Example
//!
//! ```rust
//! use lathe_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("M0 0C1,2 3,4 5,6").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::MoveTo);
//! assert_eq!(tokens[3].kind, TokenKind::CurveTo);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::span::{Position, Span};

// =============================================================================
// LEXER
// =============================================================================

/// Path lexer.
///
/// Converts source text into a stream of tokens terminated by `Eof`.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including the EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.skip_separators();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            String::new(),
        ));

        log::trace!("lexed {} path tokens", self.tokens.len());
        self.tokens
    }

    /// Skip whitespace, commas and other separator characters.
    fn skip_separators(&mut self) {
        self.cursor
            .advance_while(|c| !c.is_alphabetic() && !starts_number(c));
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return,
        };

        if starts_number(c) {
            self.scan_number(start, c);
            return;
        }

        let kind = TokenKind::command(c);
        self.push(kind, start);
    }

    /// Scan a number literal.
    ///
    /// A sign or a second `.` ends the current number, so `1-2` and
    /// `0.5.5` each lex as two numbers. An exponent is only consumed when
    /// digits follow it.
    fn scan_number(&mut self, start: Position, first_char: char) {
        let mut has_dot = first_char == '.';
        let mut has_digits = first_char.is_ascii_digit();
        let mut has_exponent = false;

        while let Some(c) = self.cursor.peek() {
            match c {
                '0'..='9' => {
                    has_digits = true;
                    self.cursor.advance();
                }
                '.' if !has_dot && !has_exponent => {
                    has_dot = true;
                    self.cursor.advance();
                }
                'e' | 'E' if has_digits && !has_exponent && self.exponent_follows() => {
                    has_exponent = true;
                    self.cursor.advance();
                    if matches!(self.cursor.peek(), Some('+') | Some('-')) {
                        self.cursor.advance();
                    }
                }
                _ => break,
            }
        }

        self.push(TokenKind::Number, start);
    }

    /// True if the character after `e`/`E` begins an exponent.
    fn exponent_follows(&self) -> bool {
        match self.cursor.peek_next() {
            Some(d) if d.is_ascii_digit() => true,
            Some('+') | Some('-') => self
                .cursor
                .peek_second()
                .map_or(false, |d| d.is_ascii_digit()),
            _ => false,
        }
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start).to_string();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

/// Characters that can begin a numeric literal.
fn starts_number(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+')
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_tokenize_single_curve() {
        assert_eq!(
            kinds("M0 0C0 0 10 0 10 10"),
            vec![
                TokenKind::MoveTo,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::CurveTo,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_relative_commands() {
        let k = kinds("m1 2c3 4 5 6 7 8");
        assert_eq!(k[0], TokenKind::MoveToRelative);
        assert_eq!(k[3], TokenKind::CurveToRelative);
    }

    #[test]
    fn test_minus_splits_numbers() {
        assert_eq!(texts("10-5-2.5"), vec!["10", "-5", "-2.5"]);
    }

    #[test]
    fn test_second_dot_splits_numbers() {
        assert_eq!(texts("0.5.25"), vec!["0.5", ".25"]);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(texts("1e3 2.5E-2 4e+1"), vec!["1e3", "2.5E-2", "4e+1"]);
    }

    #[test]
    fn test_dangling_exponent_is_not_consumed() {
        let k = kinds("4e");
        assert_eq!(k, vec![TokenKind::Number, TokenKind::Unknown, TokenKind::Eof]);
    }

    #[test]
    fn test_separators_skipped() {
        assert_eq!(texts(" 1,\t2\n,3 "), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_unknown_letter() {
        let tokens = Lexer::new("X0 0").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "X");
        assert_eq!(tokens[0].span.start.byte, 0);
    }

    #[test]
    fn test_lone_sign_is_number_token() {
        assert_eq!(texts("M -"), vec!["-"]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }
}
