//! Operator and punctuation lexing.
//!
//! Maximal munch with one byte of lookahead: the two-byte table is tried
//! first, then the single-byte table. A `\` followed by `\` or `*` starts a
//! comment instead.

use crate::error::LexResult;
use crate::token::Symbol;
use crate::Lexer;

/// Two-byte operators.
fn double_symbol(first: u8, second: u8) -> Option<Symbol> {
    let symbol = match (first, second) {
        (b'<', b'=') => Symbol::LesserEquivalent,
        (b'<', b'<') => Symbol::LeftShift,
        (b'>', b'=') => Symbol::GreaterEquivalent,
        (b'>', b'<') => Symbol::RightShift,
        (b'>', b'>') => Symbol::RightShift,
        (b':', b':') => Symbol::DoubleColon,
        (b'+', b'+') => Symbol::Increment,
        (b'-', b'-') => Symbol::Decrement,
        (b'-', b'>') => Symbol::RightArrow,
        (b'&', b'&') => Symbol::DoubleAnd,
        (b'|', b'|') => Symbol::DoubleLine,
        (b'=', b'=') => Symbol::Equivalent,
        _ => return None,
    };
    Some(symbol)
}

/// Single-byte operators and punctuators. Anything else is unrecognized.
fn single_symbol(first: u8) -> Symbol {
    match first {
        b'<' => Symbol::Lesser,
        b'>' => Symbol::Greater,
        b':' => Symbol::Colon,
        b'+' => Symbol::Plus,
        b'-' => Symbol::Minus,
        b'&' => Symbol::And,
        b'|' => Symbol::Line,
        b'=' => Symbol::Equal,
        b'\\' => Symbol::Slosh,
        b'{' => Symbol::LeftBrace,
        b'}' => Symbol::RightBrace,
        b'(' => Symbol::LeftParenthesis,
        b')' => Symbol::RightParenthesis,
        b'[' => Symbol::LeftBracket,
        b']' => Symbol::RightBracket,
        b'"' => Symbol::Quote,
        b',' => Symbol::Comma,
        b';' => Symbol::Semicolon,
        b'!' => Symbol::Exclamation,
        b'?' => Symbol::Question,
        b'@' => Symbol::At,
        other => Symbol::Unrecognized(other),
    }
}

impl Lexer {
    /// Lexes an operator, punctuator or comment.
    ///
    /// Never fails except on an unterminated block comment in strict mode;
    /// a byte nothing matches comes back as [`Symbol::Unrecognized`].
    pub(super) fn lex_symbolic(&mut self) -> LexResult<Symbol> {
        let first = self.cursor.peek();
        let second = self.cursor.peek_next();

        if first == b'\\' {
            match second {
                b'\\' => return Ok(self.lex_line_comment()),
                b'*' => return self.lex_block_comment(),
                _ => {},
            }
        }

        if let Some(symbol) = double_symbol(first, second) {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(symbol);
        }

        self.cursor.advance();
        Ok(single_symbol(first))
    }
}
