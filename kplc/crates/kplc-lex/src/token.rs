//! Token type definitions.
//!
//! A [`Token`] pairs a [`Symbol`] with the inclusive source [`Span`] it was
//! read from. `Symbol` is a single sum type: the lexical kind and, for
//! literals and identifiers, the payload that goes with it.

use serde::Serialize;
use std::fmt;

use kplc_util::span::{Position, Span};

/// The lexical kind of a token, with its payload where it has one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Symbol {
    // ===== Special =====
    /// End of input
    End,
    /// A comment; carries nothing, the caller asks for the next token
    Comment,
    /// A byte no other rule recognizes; rejecting it is the parser's call
    Unrecognized(u8),

    // ===== Identifiers and literals =====
    /// Identifier text
    Identity(String),
    /// Decimal literal
    Natural(i64),
    /// Binary or hexadecimal literal
    Machine(u64),
    /// Real literal, with or without exponent
    Real(f64),

    // ===== Keywords =====
    /// `procedure`
    Procedure,
    /// `datum`
    Datum,
    /// `give`
    Give,
    /// `Nat8`
    Nat8,
    /// `Nat16`
    Nat16,
    /// `Nat32`
    Nat32,
    /// `Nat64`
    Nat64,
    /// `Int8`
    Int8,
    /// `Int16`
    Int16,
    /// `Int32`
    Int32,
    /// `Int64`
    Int64,

    // ===== Punctuators =====
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `"`
    Quote,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `!`
    Exclamation,
    /// `?`
    Question,
    /// `@`
    At,
    /// `\` not starting a comment
    Slosh,

    // ===== Operators =====
    /// `<`
    Lesser,
    /// `<=`
    LesserEquivalent,
    /// `<<`
    LeftShift,
    /// `>`
    Greater,
    /// `>=`
    GreaterEquivalent,
    /// `><` or `>>`
    RightShift,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `+`
    Plus,
    /// `++`
    Increment,
    /// `-`
    Minus,
    /// `--`
    Decrement,
    /// `->`
    RightArrow,
    /// `&`
    And,
    /// `&&`
    DoubleAnd,
    /// `|`
    Line,
    /// `||`
    DoubleLine,
    /// `=`
    Equal,
    /// `==`
    Equivalent,
}

impl Symbol {
    /// The fixed spelling of this symbol, or `None` if its text varies
    /// (identifiers, literals, comments, unrecognized bytes, end of input).
    pub fn lexeme(&self) -> Option<&'static str> {
        let text = match self {
            Symbol::End
            | Symbol::Comment
            | Symbol::Unrecognized(_)
            | Symbol::Identity(_)
            | Symbol::Natural(_)
            | Symbol::Machine(_)
            | Symbol::Real(_) => return None,

            Symbol::Procedure => "procedure",
            Symbol::Datum => "datum",
            Symbol::Give => "give",
            Symbol::Nat8 => "Nat8",
            Symbol::Nat16 => "Nat16",
            Symbol::Nat32 => "Nat32",
            Symbol::Nat64 => "Nat64",
            Symbol::Int8 => "Int8",
            Symbol::Int16 => "Int16",
            Symbol::Int32 => "Int32",
            Symbol::Int64 => "Int64",

            Symbol::LeftBrace => "{",
            Symbol::RightBrace => "}",
            Symbol::LeftParenthesis => "(",
            Symbol::RightParenthesis => ")",
            Symbol::LeftBracket => "[",
            Symbol::RightBracket => "]",
            Symbol::Quote => "\"",
            Symbol::Comma => ",",
            Symbol::Semicolon => ";",
            Symbol::Exclamation => "!",
            Symbol::Question => "?",
            Symbol::At => "@",
            Symbol::Slosh => "\\",

            Symbol::Lesser => "<",
            Symbol::LesserEquivalent => "<=",
            Symbol::LeftShift => "<<",
            Symbol::Greater => ">",
            Symbol::GreaterEquivalent => ">=",
            Symbol::RightShift => ">>",
            Symbol::Colon => ":",
            Symbol::DoubleColon => "::",
            Symbol::Plus => "+",
            Symbol::Increment => "++",
            Symbol::Minus => "-",
            Symbol::Decrement => "--",
            Symbol::RightArrow => "->",
            Symbol::And => "&",
            Symbol::DoubleAnd => "&&",
            Symbol::Line => "|",
            Symbol::DoubleLine => "||",
            Symbol::Equal => "=",
            Symbol::Equivalent => "==",
        };
        Some(text)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::End => write!(f, "end of input"),
            Symbol::Comment => write!(f, "comment"),
            Symbol::Unrecognized(byte) => write!(f, "unrecognized byte {:#04x}", byte),
            Symbol::Identity(text) => write!(f, "identity `{}`", text),
            Symbol::Natural(value) => write!(f, "natural {}", value),
            Symbol::Machine(value) => write!(f, "machine {:#x}", value),
            Symbol::Real(value) => write!(f, "real {:?}", value),
            other => match other.lexeme() {
                Some(text) => write!(f, "`{}`", text),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

/// Looks up a reserved word.
///
/// Matching is exact and case-sensitive: `Nat8` is a keyword, `nat8` is an
/// identifier.
///
/// # Example
///
/// ```
/// use kplc_lex::{keyword_from_identity, Symbol};
///
/// assert_eq!(keyword_from_identity("give"), Some(Symbol::Give));
/// assert_eq!(keyword_from_identity("Give"), None);
/// ```
pub fn keyword_from_identity(text: &str) -> Option<Symbol> {
    let symbol = match text {
        "procedure" => Symbol::Procedure,
        "datum" => Symbol::Datum,
        "give" => Symbol::Give,
        "Nat8" => Symbol::Nat8,
        "Nat16" => Symbol::Nat16,
        "Nat32" => Symbol::Nat32,
        "Nat64" => Symbol::Nat64,
        "Int8" => Symbol::Int8,
        "Int16" => Symbol::Int16,
        "Int32" => Symbol::Int32,
        "Int64" => Symbol::Int64,
        _ => return None,
    };
    Some(symbol)
}

/// A classified lexical unit and its inclusive source span.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// What was read
    pub symbol: Symbol,
    /// Where it was read from
    pub span: Span,
}

impl Token {
    /// Create a token
    pub fn new(symbol: Symbol, span: Span) -> Self {
        Self { symbol, span }
    }

    /// Position of the first byte
    #[inline]
    pub fn start(&self) -> Position {
        self.span.start
    }

    /// Position of the last byte
    ///
    /// If that byte is a newline (a block comment left open at a line
    /// break), this is the newline's position on the line it ends.
    #[inline]
    pub fn end(&self) -> Position {
        self.span.end
    }

    /// Returns true for the end-of-input token
    #[inline]
    pub fn is_end(&self) -> bool {
        self.symbol == Symbol::End
    }

    /// Returns true for comment tokens
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.symbol == Symbol::Comment
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.span, self.symbol)
    }
}
