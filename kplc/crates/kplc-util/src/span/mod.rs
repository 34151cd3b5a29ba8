//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! 1-based line/column pairs, plus a line index over a single source buffer.
//!
//! # Examples
//!
//! ```
//! use kplc_util::span::{Position, Span};
//!
//! let span = Span::new(Position::new(1, 5), Position::new(1, 9));
//! assert_eq!(span.start.column, 5);
//! assert_eq!(span.to_string(), "1:5-1:9");
//! ```

mod source_text;

pub use source_text::SourceText;

use serde::Serialize;
use std::fmt;

/// A point in the source, both coordinates 1-based.
///
/// Ordering is by line first, then column, which matches the order in which
/// a lexer visits the source.
///
/// # Examples
///
/// ```
/// use kplc_util::span::Position;
///
/// let a = Position::new(1, 9);
/// let b = Position::new(2, 1);
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in bytes)
    pub column: u32,
}

static_assertions::assert_eq_size!(Position, u64);

impl Position {
    /// The position of the first byte of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` covers the bytes from `start` to `end`, both inclusive.
///
/// # Examples
///
/// ```
/// use kplc_util::span::{Position, Span};
///
/// // Create a point span (single location)
/// let point = Span::point(Position::new(3, 4));
/// assert_eq!(point.start, point.end);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// First position covered
    pub start: Position,
    /// Last position covered
    pub end: Position,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: Position::START,
        end: Position::START,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span at a single point
    #[inline]
    pub const fn point(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
