//! Identifier and keyword lexing.

use kplc_util::text;

use crate::error::{LexErrorKind, LexModule, LexResult};
use crate::token::{keyword_from_identity, Symbol};
use crate::Lexer;

#[inline]
fn continues_identity(byte: u8) -> bool {
    text::is_alphanumeric(byte) || byte == b'_'
}

impl Lexer {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. The run is then matched exactly against the
    /// keyword table.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the run is longer than
    /// [`LexerConfig::max_identity_length`](crate::LexerConfig).
    pub(super) fn lex_identity(&mut self) -> LexResult<Symbol> {
        let mut text = String::new();

        while continues_identity(self.cursor.peek()) {
            if text.len() == self.config.max_identity_length {
                return Err(self.fault(LexModule::Alphabetic, LexErrorKind::OutOfRange));
            }
            text.push(char::from(self.cursor.peek()));
            self.cursor.advance();
        }

        Ok(keyword_from_identity(&text).unwrap_or(Symbol::Identity(text)))
    }
}
