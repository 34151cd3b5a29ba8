//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct, which owns the source buffer for
//! a lexing session and tracks the lookahead byte and the line/column of that
//! byte.

use kplc_util::span::Position;
use kplc_util::text;

/// A cursor over an owned, length-bounded byte buffer.
///
/// The lookahead byte (`peek`) is always the byte at `index`, or `0` once
/// `index` has reached the logical end. Reads past the end never touch the
/// buffer, so a lexer can be called any number of times after it reached the
/// end.
///
/// # Example
///
/// ```
/// use kplc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"ab\ncd".to_vec());
/// assert_eq!(cursor.peek(), b'a');
/// cursor.advance();
/// assert_eq!(cursor.peek(), b'b');
/// assert_eq!(cursor.peek_next(), b'\n');
/// ```
pub struct Cursor {
    /// The source buffer, owned for the whole session.
    source: Vec<u8>,

    /// Logical end: the first NUL byte, or the buffer length.
    end: usize,

    /// Index of the lookahead byte.
    index: usize,

    /// Copy of `source[index]`, or 0 at the end.
    peek: u8,

    /// Position of the lookahead byte.
    point: Position,

    /// Position of the last consumed byte.
    last: Position,
}

impl Cursor {
    /// Creates a cursor that takes ownership of `source`.
    ///
    /// A zero-terminated buffer is accepted as is: the logical end is the
    /// first NUL byte.
    pub fn new(source: Vec<u8>) -> Self {
        let end = source.iter().position(|&b| b == 0).unwrap_or(source.len());
        let peek = if end > 0 { source[0] } else { 0 };
        Self {
            source,
            end,
            index: 0,
            peek,
            point: Position::START,
            last: Position::START,
        }
    }

    /// The lookahead byte, `0` at the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek
    }

    /// The byte after the lookahead byte, `0` at or past the end.
    #[inline]
    pub fn peek_next(&self) -> u8 {
        self.byte_at(self.index + 1)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        if index < self.end {
            self.source[index]
        } else {
            0
        }
    }

    /// Consumes the lookahead byte.
    ///
    /// A consumed newline moves to column 1 of the next line; any other byte
    /// moves one column right. Does nothing at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use kplc_lex::cursor::Cursor;
    /// use kplc_util::span::Position;
    ///
    /// let mut cursor = Cursor::new(b"a\nb".to_vec());
    /// cursor.advance();
    /// assert_eq!(cursor.point(), Position::new(1, 2));
    /// cursor.advance();
    /// assert_eq!(cursor.point(), Position::new(2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        self.last = self.point;

        if self.peek == b'\n' {
            self.point.line += 1;
            self.point.column = 1;
        } else {
            self.point.column += 1;
        }

        self.index += 1;
        self.peek = self.byte_at(self.index);
    }

    /// Skips whitespace bytes. Comments are tokens, not whitespace.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && text::is_whitespace(self.peek) {
            self.advance();
        }
    }

    /// Returns true once every byte before the logical end is consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index >= self.end
    }

    /// Position of the lookahead byte.
    #[inline]
    pub fn point(&self) -> Position {
        self.point
    }

    /// Position of the last consumed byte.
    ///
    /// Within a line this is the current column minus one. Right after a
    /// newline has been consumed it is the newline itself, on the previous
    /// line. Before anything is consumed it is [`Position::START`].
    #[inline]
    pub fn last_point(&self) -> Position {
        self.last
    }

    /// Index of the lookahead byte in the buffer.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length of the logical source.
    #[inline]
    pub fn len(&self) -> usize {
        self.end
    }

    /// Returns true if the logical source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Gives the buffer back, ending the session.
    pub fn into_source(self) -> Vec<u8> {
        self.source
    }
}
