//! Number literal lexing.
//!
//! Four sub-scanners share one discipline: `_` inside a digit run is a
//! separator that is consumed but never copied into the value text, and every
//! sub-scanner needs at least one significant digit.
//!
//! # Number Formats
//!
//! - Natural: `42`, `1_000`, `007`
//! - Binary: `0b1010`, `0B1111_0000`
//! - Hexadecimal: `0x1F`, `0XAB_CD`
//! - Real: `3.14`, `0.5`, `1_0.2_5`
//! - Exponent: `1e10`, `2.5e-3`, `6E+2`

use kplc_util::text;
use kplc_util::ConversionError;

use crate::error::{LexError, LexErrorKind, LexModule, LexResult};
use crate::token::Symbol;
use crate::Lexer;

/// Decimal digit or separator.
#[inline]
fn is_natural_digit(byte: u8) -> bool {
    text::is_numeric(byte) || byte == b'_'
}

#[inline]
fn is_binary_digit(byte: u8) -> bool {
    text::is_binary(byte) || byte == b'_'
}

#[inline]
fn is_hexadecimal_digit(byte: u8) -> bool {
    text::is_hexadecimal(byte) || byte == b'_'
}

fn conversion_kind(error: ConversionError) -> LexErrorKind {
    match error {
        ConversionError::InvalidArgument => LexErrorKind::Inconvertible,
        ConversionError::OutOfRange => LexErrorKind::OutOfRange,
    }
}

impl Lexer {
    /// Lexes a number literal. The lookahead byte is a decimal digit.
    ///
    /// Redundant leading zeros are dropped, `0b` and `0x` select the machine
    /// sub-scanners, and a bare `0` is `Natural(0)`.
    pub(super) fn lex_number(&mut self) -> LexResult<Symbol> {
        if self.cursor.peek() == b'0' {
            self.cursor.advance();
            match self.cursor.peek() {
                b'0' => {
                    while self.cursor.peek() == b'0' {
                        self.cursor.advance();
                    }
                },
                b'b' | b'B' => {
                    self.cursor.advance();
                    return self.lex_machine(LexModule::Binary);
                },
                b'x' | b'X' => {
                    self.cursor.advance();
                    return self.lex_machine(LexModule::Hexadecimal);
                },
                _ => {},
            }
        }

        match self.cursor.peek() {
            byte if is_natural_digit(byte) => self.lex_natural(String::new()),
            b'.' => self.lex_real(String::new()),
            _ => Ok(Symbol::Natural(0)),
        }
    }

    /// Copies the lookahead digit into `digits` unless it is a separator,
    /// then consumes it.
    #[inline]
    fn put_digit(&mut self, digits: &mut String) {
        let byte = self.cursor.peek();
        if byte != b'_' {
            digits.push(char::from(byte));
        }
        self.cursor.advance();
    }

    /// True if the lookahead is an exponent marker that really starts an
    /// exponent: `e`/`E` followed by a digit or a sign.
    #[inline]
    fn at_exponent(&self) -> bool {
        matches!(self.cursor.peek(), b'e' | b'E')
            && (text::is_numeric(self.cursor.peek_next())
                || matches!(self.cursor.peek_next(), b'+' | b'-'))
    }

    fn convert_fault(&self, module: LexModule, error: ConversionError) -> LexError {
        self.fault(module, conversion_kind(error))
    }

    /// Lexes a binary or hexadecimal literal. The prefix is already consumed.
    fn lex_machine(&mut self, module: LexModule) -> LexResult<Symbol> {
        let (radix, is_digit): (u32, fn(u8) -> bool) = match module {
            LexModule::Binary => (2, is_binary_digit),
            _ => (16, is_hexadecimal_digit),
        };

        if !is_digit(self.cursor.peek()) {
            return Err(self.fault(module, LexErrorKind::WrongFormat));
        }

        let mut digits = String::new();
        while is_digit(self.cursor.peek()) {
            self.put_digit(&mut digits);
        }

        if digits.is_empty() {
            return Err(self.fault(module, LexErrorKind::Valueless));
        }

        text::convert_to_natural(&digits, radix)
            .map(Symbol::Machine)
            .map_err(|error| self.convert_fault(module, error))
    }

    /// Lexes a decimal literal, handing over to the real or exponent
    /// sub-scanner when a point or exponent follows.
    fn lex_natural(&mut self, mut digits: String) -> LexResult<Symbol> {
        loop {
            self.put_digit(&mut digits);

            if self.cursor.peek() == b'.' {
                return self.lex_real(digits);
            }
            if !digits.is_empty() && self.at_exponent() {
                return self.lex_scientific(digits);
            }
            if !is_natural_digit(self.cursor.peek()) {
                break;
            }
        }

        if digits.is_empty() {
            return Err(self.fault(LexModule::Natural, LexErrorKind::Valueless));
        }

        text::convert_to_integer(&digits)
            .map(Symbol::Natural)
            .map_err(|error| self.convert_fault(LexModule::Natural, error))
    }

    /// Lexes the fraction of a real literal. The lookahead is the point.
    fn lex_real(&mut self, mut digits: String) -> LexResult<Symbol> {
        digits.push('.');
        self.cursor.advance();

        if !is_natural_digit(self.cursor.peek()) {
            return Err(self.fault(LexModule::Real, LexErrorKind::WrongFormat));
        }

        let mut significant = false;
        while is_natural_digit(self.cursor.peek()) {
            significant |= self.cursor.peek() != b'_';
            self.put_digit(&mut digits);
            if self.cursor.peek() == b'.' {
                return Err(self.fault(LexModule::Real, LexErrorKind::WrongFormat));
            }
        }

        if !significant {
            return Err(self.fault(LexModule::Real, LexErrorKind::Valueless));
        }
        if self.at_exponent() {
            return self.lex_scientific(digits);
        }

        text::convert_to_real(&digits)
            .map(Symbol::Real)
            .map_err(|error| self.convert_fault(LexModule::Real, error))
    }

    /// Lexes an exponent. The lookahead is the `e`/`E` marker and the
    /// mantissa text is in `digits`.
    fn lex_scientific(&mut self, mut digits: String) -> LexResult<Symbol> {
        digits.push('e');
        self.cursor.advance();

        let sign = self.cursor.peek();
        if matches!(sign, b'+' | b'-') {
            digits.push(char::from(sign));
            self.cursor.advance();
            if !is_natural_digit(self.cursor.peek()) {
                return Err(self.fault(LexModule::Scientific, LexErrorKind::Incomplete));
            }
        }

        let mut significant = false;
        while is_natural_digit(self.cursor.peek()) {
            significant |= self.cursor.peek() != b'_';
            self.put_digit(&mut digits);
            if self.cursor.peek() == b'.' {
                return Err(self.fault(LexModule::Scientific, LexErrorKind::WrongFormat));
            }
        }

        if !significant {
            return Err(self.fault(LexModule::Scientific, LexErrorKind::Valueless));
        }

        text::convert_to_real(&digits)
            .map(Symbol::Real)
            .map_err(|error| self.convert_fault(LexModule::Scientific, error))
    }
}
