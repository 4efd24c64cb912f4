//! # Path Parser
//!
//! Turns lexer tokens into the raw point list of a profile path:
//! one moveto point followed by groups of three points per cubic.
//!
//! ## Grammar
//!
//! ```text
//! path     := moveto curveto+
//! moveto   := ('M' | 'm') number number
//! curveto  := ('C' | 'c') (number number){3}+
//! ```
//!
//! Relative coordinates are offset by the current point, which is the end
//! point of the previous cubic group (or the moveto point).

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use config::constants::{MIN_PATH_POINTS, POINTS_PER_CURVE};
use glam::DVec2;


// =============================================================================
// COMMAND STATE
// =============================================================================

/// Command currently consuming coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// No command seen yet.
    Start,
    /// After `M`/`m`.
    MoveTo,
    /// After `C`/`c`.
    CurveTo,
}

// =============================================================================
// PARSER
// =============================================================================

/// Token-level parser producing absolute points.
pub struct Parser {
    tokens: Vec<Token>,
    mode: Mode,
    relative: bool,
    /// Point the next relative group is measured from.
    current: DVec2,
    /// Pending x coordinate awaiting its y.
    pending_x: Option<(f64, Span)>,
    /// Points of the cubic group being read.
    group: Vec<DVec2>,
    /// Span of the first coordinate of the pending group.
    group_span: Span,
    /// A curveto command has not yet completed any group.
    curve_open: bool,
    /// Completed absolute points.
    points: Vec<DVec2>,
}

impl Parser {
    /// Create a parser over a token stream (ending with `Eof`).
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            mode: Mode::Start,
            relative: false,
            current: DVec2::ZERO,
            pending_x: None,
            group: Vec::with_capacity(POINTS_PER_CURVE),
            group_span: Span::zero(),
            curve_open: false,
            points: Vec::new(),
        }
    }

    /// Parse all tokens into absolute points.
    ///
    /// The returned list always has `1 + 3k` points with `k >= 1`.
    pub fn parse(mut self) -> Result<Vec<DVec2>, ParseError> {
        let tokens = std::mem::take(&mut self.tokens);
        for token in &tokens {
            match token.kind {
                TokenKind::MoveTo | TokenKind::MoveToRelative => self.begin_moveto(token)?,
                TokenKind::CurveTo | TokenKind::CurveToRelative => self.begin_curveto(token)?,
                TokenKind::Number => self.number(token)?,
                TokenKind::Unknown => {
                    let command = token.text.chars().next().unwrap_or('?');
                    return Err(ParseError::unknown_command(command).with_span(token.span));
                }
                TokenKind::Eof => self.finish(token.span)?,
            }
        }

        if self.points.len() < MIN_PATH_POINTS {
            let end = tokens.last().map(|t| t.span).unwrap_or_default();
            return Err(
                ParseError::too_few_points(self.points.len(), MIN_PATH_POINTS).with_span(end)
            );
        }
        Ok(self.points)
    }

    fn begin_moveto(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.mode != Mode::Start {
            return Err(ParseError::new(ParseErrorKind::RepeatedMoveTo, token.span));
        }
        self.mode = Mode::MoveTo;
        self.relative = token.kind.is_relative();
        Ok(())
    }

    fn begin_curveto(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.mode == Mode::Start {
            return Err(ParseError::new(ParseErrorKind::MissingMoveTo, token.span));
        }
        self.check_no_dangling(token.span)?;
        self.mode = Mode::CurveTo;
        self.curve_open = true;
        self.relative = token.kind.is_relative();
        Ok(())
    }

    fn number(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.mode == Mode::Start {
            return Err(ParseError::new(ParseErrorKind::MissingMoveTo, token.span));
        }

        let value = parse_number(&token.text).ok_or_else(|| {
            ParseError::invalid_number(&token.text).with_span(token.span)
        })?;

        match self.pending_x.take() {
            None => {
                if self.group.is_empty() {
                    self.group_span = token.span;
                }
                self.pending_x = Some((value, token.span));
                Ok(())
            }
            Some((x, _)) => self.point(DVec2::new(x, value), token.span),
        }
    }

    fn point(&mut self, raw: DVec2, span: Span) -> Result<(), ParseError> {
        let p = if self.relative { self.current + raw } else { raw };

        match self.mode {
            Mode::MoveTo => {
                if !self.points.is_empty() {
                    return Err(ParseError::new(ParseErrorKind::UnexpectedCoordinate, span));
                }
                self.points.push(p);
                self.current = p;
            }
            Mode::CurveTo => {
                self.group.push(p);
                if self.group.len() == POINTS_PER_CURVE {
                    self.points.append(&mut self.group);
                    self.current = p;
                    self.curve_open = false;
                }
            }
            Mode::Start => {
                return Err(ParseError::new(ParseErrorKind::MissingMoveTo, span));
            }
        }
        Ok(())
    }

    fn check_no_dangling(&self, at: Span) -> Result<(), ParseError> {
        let coordinates = self.dangling_coordinates();
        let moveto_pending = self.mode == Mode::MoveTo && self.points.is_empty();
        if coordinates > 0 || moveto_pending || self.curve_open {
            let span = if coordinates > 0 { self.group_span.merge(&at) } else { at };
            return Err(ParseError::new(
                ParseErrorKind::IncompleteSegment { coordinates },
                span,
            ));
        }
        Ok(())
    }

    fn finish(&mut self, eof: Span) -> Result<(), ParseError> {
        let coordinates = self.dangling_coordinates();
        if coordinates > 0 || self.curve_open {
            let span = if coordinates > 0 { self.group_span.merge(&eof) } else { eof };
            return Err(ParseError::new(
                ParseErrorKind::IncompleteSegment { coordinates },
                span,
            ));
        }
        Ok(())
    }

    fn dangling_coordinates(&self) -> usize {
        self.group.len() * 2 + usize::from(self.pending_x.is_some())
    }
}

/// Parses a numeric token, rejecting non-finite values.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
