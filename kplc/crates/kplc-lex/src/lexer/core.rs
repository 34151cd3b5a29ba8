//! Core lexer implementation.
//!
//! This module contains the Lexer struct, its session lifecycle and the
//! driver that dispatches on the first byte of each token.

use std::iter::FusedIterator;

use kplc_util::span::{Position, Span};
use kplc_util::text;
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexModule, LexResult};
use crate::token::{Symbol, Token};

/// Lexer for KPL source.
///
/// A lexer owns its source buffer for the whole session and hands out one
/// token per [`next_token`](Lexer::next_token) call. Tokens own their payload
/// and outlive the lexer.
///
/// # Example
///
/// ```
/// use kplc_lex::{Lexer, Symbol};
///
/// let mut lexer = Lexer::new("give 0x1F;");
/// assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Give);
/// assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Machine(31));
/// assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Semicolon);
/// assert!(lexer.next_token().unwrap().is_end());
///
/// let source = lexer.teardown();
/// assert_eq!(source, b"give 0x1F;");
/// ```
pub struct Lexer {
    /// Byte cursor over the owned source.
    pub(super) cursor: Cursor,

    /// Session settings.
    pub(super) config: LexerConfig,

    /// Start of the token being scanned; faults report this position.
    pub(super) token_start: Position,

    /// Set once the iterator has yielded its last item.
    exhausted: bool,
}

impl Lexer {
    /// Starts a session over `source` with default settings.
    ///
    /// The lexer takes ownership of the buffer. If it contains a NUL byte,
    /// the source ends there.
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Starts a session over `source` with explicit settings.
    pub fn with_config(source: impl Into<Vec<u8>>, config: LexerConfig) -> Self {
        let cursor = Cursor::new(source.into());
        debug!(
            len = cursor.len(),
            max_identity_length = config.max_identity_length,
            strict_comments = config.strict_comments,
            "lexer constructed"
        );
        Self {
            cursor,
            config,
            token_start: Position::START,
            exhausted: false,
        }
    }

    /// Returns the next token.
    ///
    /// Whitespace is skipped first. At the end of input this returns an
    /// [`Symbol::End`] token with a point span at the current position, and
    /// keeps returning it on every later call. Comments come back as
    /// [`Symbol::Comment`] tokens.
    ///
    /// # Errors
    ///
    /// Returns the [`LexError`] raised by the scanner for a malformed token.
    /// Nothing is skipped or recovered; what the caller does next is up to
    /// it.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.cursor.skip_whitespace();

        if self.cursor.is_at_end() {
            let point = self.cursor.point();
            return Ok(Token::new(Symbol::End, Span::point(point)));
        }

        self.token_start = self.cursor.point();

        let first = self.cursor.peek();
        let symbol = if text::is_alphabetic(first) || first == b'_' {
            self.lex_identity()?
        } else if text::is_numeric(first) {
            self.lex_number()?
        } else {
            self.lex_symbolic()?
        };

        let token = Token::new(symbol, Span::new(self.token_start, self.cursor.last_point()));
        trace!(symbol = %token.symbol, span = %token.span, "token");
        Ok(token)
    }

    /// Ends the session and gives the source buffer back.
    pub fn teardown(self) -> Vec<u8> {
        self.cursor.into_source()
    }

    /// Builds a fault at the start of the current token.
    pub(super) fn fault(&self, module: LexModule, kind: LexErrorKind) -> LexError {
        let error = LexError::new(module, kind, self.token_start);
        debug!(
            module = ?module,
            kind = ?kind,
            start = %self.token_start,
            index = self.cursor.index(),
            "lexical fault"
        );
        error
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.point().line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.point().column
    }

    /// Returns the position of the next byte to be lexed.
    pub fn position(&self) -> Position {
        self.cursor.point()
    }

    /// Returns the session settings.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

/// Yields every token before the end of input, comments included.
///
/// A fault is yielded once, after which the iterator is exhausted.
impl Iterator for Lexer {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_end() => {
                self.exhausted = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.exhausted = true;
                Some(Err(error))
            },
        }
    }
}

impl FusedIterator for Lexer {}
