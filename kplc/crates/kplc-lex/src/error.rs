//! Lexical faults.
//!
//! A fault names the sub-scanner that raised it ([`LexModule`]) and what went
//! wrong ([`LexErrorKind`]) as two separate fields, plus the start of the
//! token being scanned. The lexer never catches its own faults; they reach
//! the caller unchanged.

use std::fmt;

use kplc_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet};
use kplc_util::span::{Position, SourceText, Span};
use thiserror::Error;

/// The sub-scanner that raised a fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexModule {
    /// Identifier and keyword scanner
    Alphabetic,
    /// Decimal integer scanner
    Natural,
    /// `0b` literal scanner
    Binary,
    /// `0x` literal scanner
    Hexadecimal,
    /// Fractional part scanner
    Real,
    /// Exponent scanner
    Scientific,
    /// Operator, punctuator and comment scanner
    Symbolic,
}

impl LexModule {
    /// 1-based ordinal, used for diagnostic codes.
    pub const fn ordinal(self) -> u32 {
        match self {
            LexModule::Alphabetic => 1,
            LexModule::Natural => 2,
            LexModule::Binary => 3,
            LexModule::Hexadecimal => 4,
            LexModule::Real => 5,
            LexModule::Scientific => 6,
            LexModule::Symbolic => 7,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            LexModule::Alphabetic => "identifier",
            LexModule::Natural => "natural literal",
            LexModule::Binary => "binary literal",
            LexModule::Hexadecimal => "hexadecimal literal",
            LexModule::Real => "real literal",
            LexModule::Scientific => "exponent",
            LexModule::Symbolic => "comment",
        }
    }
}

impl fmt::Display for LexModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// The literal has the wrong shape: an illegal first digit, or a second
    /// point
    WrongFormat,
    /// A prefix, point or exponent marker with no significant digit after it
    Valueless,
    /// A construct was started but the input ran out before it could finish
    Incomplete,
    /// The number conversion rejected the collected text
    Inconvertible,
    /// The value does not fit its type, or an identifier is too long
    OutOfRange,
}

impl LexErrorKind {
    /// 1-based ordinal, used for diagnostic codes.
    pub const fn ordinal(self) -> u32 {
        match self {
            LexErrorKind::WrongFormat => 1,
            LexErrorKind::Valueless => 2,
            LexErrorKind::Incomplete => 3,
            LexErrorKind::Inconvertible => 4,
            LexErrorKind::OutOfRange => 5,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            LexErrorKind::WrongFormat => "has the wrong format",
            LexErrorKind::Valueless => "has no digits",
            LexErrorKind::Incomplete => "is incomplete",
            LexErrorKind::Inconvertible => "cannot be converted",
            LexErrorKind::OutOfRange => "is out of range",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// A lexical fault.
///
/// # Example
///
/// ```
/// use kplc_lex::{LexError, LexErrorKind, LexModule};
/// use kplc_util::span::Position;
///
/// let err = LexError::new(LexModule::Binary, LexErrorKind::Valueless, Position::new(3, 9));
/// assert_eq!(err.to_string(), "binary literal has no digits at 3:9");
/// assert_eq!(err.code().as_str(), "E1302");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{module} {kind} at {start}")]
pub struct LexError {
    /// Sub-scanner that raised the fault
    pub module: LexModule,
    /// What went wrong
    pub kind: LexErrorKind,
    /// Start of the token being scanned
    pub start: Position,
}

/// Result type alias for lexing operations
pub type LexResult<T> = std::result::Result<T, LexError>;

impl LexError {
    /// Create a fault
    pub const fn new(module: LexModule, kind: LexErrorKind, start: Position) -> Self {
        Self {
            module,
            kind,
            start,
        }
    }

    /// `E1MK`, where `M` is the module ordinal and `K` the kind ordinal.
    pub const fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(
            "E",
            DiagnosticCode::LEXER_BASE + self.module.ordinal() * 100 + self.kind.ordinal(),
        )
    }

    fn help(&self) -> Option<&'static str> {
        let help = match (self.module, self.kind) {
            (LexModule::Binary, LexErrorKind::WrongFormat) => "binary digits are `0` and `1`",
            (LexModule::Hexadecimal, LexErrorKind::WrongFormat) => {
                "hexadecimal digits are `0`-`9`, `a`-`f` and `A`-`F`"
            },
            (LexModule::Real, LexErrorKind::WrongFormat) => {
                "a real literal has one point followed by at least one digit"
            },
            (LexModule::Scientific, LexErrorKind::WrongFormat) => {
                "an exponent is an integer, it cannot contain a point"
            },
            (LexModule::Scientific, LexErrorKind::Incomplete) => {
                "add the exponent digits after the sign"
            },
            (LexModule::Symbolic, LexErrorKind::Incomplete) => "close the comment with `*\\`",
            (_, LexErrorKind::Valueless) => "`_` separates digits but is not a digit itself",
            (LexModule::Alphabetic, LexErrorKind::OutOfRange) => "shorten the identifier",
            (LexModule::Natural, LexErrorKind::OutOfRange) => {
                "natural literals must fit in a signed 64-bit integer"
            },
            (LexModule::Binary | LexModule::Hexadecimal, LexErrorKind::OutOfRange) => {
                "machine literals must fit in an unsigned 64-bit integer"
            },
            _ => return None,
        };
        Some(help)
    }

    /// Build the diagnostic for this fault, naming `source` and quoting the
    /// offending line.
    pub fn to_diagnostic(&self, source: &SourceText) -> Diagnostic {
        let mut builder = DiagnosticBuilder::error(format!("{} {}", self.module, self.kind))
            .code(self.code())
            .file(source.name())
            .span(Span::point(self.start));

        if let Some(line) = source.line_at(self.start.line as usize) {
            builder = builder.snippet(SourceSnippet::point(
                line.into_owned(),
                self.start.line as usize,
                self.start.column as usize,
            ));
        }
        if let Some(help) = self.help() {
            builder = builder.help(help);
        }

        builder.build()
    }
}
