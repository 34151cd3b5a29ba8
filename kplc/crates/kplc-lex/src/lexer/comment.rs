//! Comment lexing.
//!
//! Comments are tokens, not whitespace: the driver returns them as
//! [`Symbol::Comment`] and the caller asks again.

use crate::error::{LexErrorKind, LexModule, LexResult};
use crate::token::Symbol;
use crate::Lexer;

impl Lexer {
    /// Lexes a line comment, from `\\` up to but not including the newline.
    pub(super) fn lex_line_comment(&mut self) -> Symbol {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.peek() != b'\n' {
            self.cursor.advance();
        }

        Symbol::Comment
    }

    /// Lexes a block comment, from `\*` through the closing `*\`.
    ///
    /// Block comments do not nest. One that runs to the end of input is
    /// accepted unless `strict_comments` is set.
    pub(super) fn lex_block_comment(&mut self) -> LexResult<Symbol> {
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                if self.config.strict_comments {
                    return Err(self.fault(LexModule::Symbolic, LexErrorKind::Incomplete));
                }
                return Ok(Symbol::Comment);
            }

            if self.cursor.peek() == b'*' && self.cursor.peek_next() == b'\\' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(Symbol::Comment);
            }

            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexErrorKind, LexModule, Lexer, LexerConfig, Symbol};
    use kplc_util::span::Position;

    fn strict(source: &str) -> Lexer {
        Lexer::with_config(
            source,
            LexerConfig {
                strict_comments: true,
                ..LexerConfig::default()
            },
        )
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let mut lexer = Lexer::new("\\\\ give 1\nx");
        assert_eq!(lexer.lex_symbolic(), Ok(Symbol::Comment));
        assert_eq!(lexer.cursor.peek(), b'\n');
        assert_eq!(lexer.cursor.point(), Position::new(1, 10));
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        let mut lexer = Lexer::new("\\\\");
        assert_eq!(lexer.lex_symbolic(), Ok(Symbol::Comment));
        assert!(lexer.cursor.is_at_end());
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let mut lexer = Lexer::new("\\* one\ntwo *\\x");
        assert_eq!(lexer.lex_symbolic(), Ok(Symbol::Comment));
        assert_eq!(lexer.cursor.peek(), b'x');
        assert_eq!(lexer.cursor.point(), Position::new(2, 7));
    }

    #[test]
    fn test_block_comment_does_not_nest() {
        let mut lexer = Lexer::new("\\* a \\* b *\\ c *\\");
        assert_eq!(lexer.lex_symbolic(), Ok(Symbol::Comment));
        assert_eq!(lexer.cursor.peek(), b' ');
        assert_eq!(lexer.cursor.peek_next(), b'c');
    }

    #[test]
    fn test_unterminated_block_comment_is_accepted() {
        let mut lexer = Lexer::new("\\* abc");
        assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Comment);
        assert!(lexer.next_token().unwrap().is_end());
    }

    #[test]
    fn test_unterminated_block_comment_in_strict_mode() {
        let mut lexer = strict("give \\* abc *");
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.module, LexModule::Symbolic);
        assert_eq!(err.kind, LexErrorKind::Incomplete);
        assert_eq!(err.start, Position::new(1, 6));
    }

    #[test]
    fn test_terminated_block_comment_in_strict_mode() {
        let mut lexer = strict("\\**\\");
        assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Comment);
        assert!(lexer.next_token().unwrap().is_end());
    }
}
