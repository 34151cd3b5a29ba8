//! kplc-lex - Lexical Analyzer for KPL
//!
//! This crate turns KPL source bytes into a stream of classified tokens
//! carrying exact source positions. It classifies every numeric literal form,
//! disambiguates operators with one byte of lookahead, and reports malformed
//! tokens as structured faults. It never backtracks.
//!
//! # Example Usage
//!
//! ```
//! use kplc_lex::{Lexer, Symbol};
//!
//! let mut lexer = Lexer::new("datum x: Nat8 = 0b1010;");
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Datum);
//! assert_eq!(lexer.next_token().unwrap().symbol, Symbol::Identity("x".into()));
//!
//! // Or iterate through the rest
//! for token in &mut lexer {
//!     println!("{}", token.unwrap());
//! }
//! ```
//!
//! To lex a whole buffer at once, use [`tokenize`].
//!
//! # Module Structure
//!
//! - [`token`] - Token and symbol definitions
//! - [`lexer`] - The lexer and its scanners
//! - [`cursor`] - Byte cursor and position tracking
//! - [`error`] - Fault taxonomy
//! - [`config`] - Session settings
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `procedure`, `datum`, `give`, `Nat8`, `Nat16`, `Nat32`, `Nat64`, `Int8`,
//! `Int16`, `Int32`, `Int64`. Matching is case-sensitive.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, at most 1024 bytes by default.
//!
//! ## Literals
//!
//! - **Natural**: `42`, `1_000`, signed 64-bit
//! - **Machine**: `0b1010`, `0x1F`, unsigned 64-bit
//! - **Real**: `3.14`, `1.5e3`, `2e-2`, 64-bit float
//!
//! ## Operators
//!
//! `<` `<=` `<<` `>` `>=` `><` `>>` `:` `::` `+` `++` `-` `--` `->` `&` `&&`
//! `|` `||` `=` `==`
//!
//! ## Punctuators
//!
//! `{` `}` `(` `)` `[` `]` `"` `,` `;` `!` `?` `@` `\`
//!
//! ## Comments
//!
//! `\\` to the end of the line, and `\*` ... `*\` blocks.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexModule, LexResult};
pub use lexer::Lexer;
pub use token::{keyword_from_identity, Symbol, Token};

/// Lexes `source` to completion with default settings.
///
/// Comment tokens are dropped; the final [`Symbol::End`] token is kept.
///
/// # Errors
///
/// The first fault stops lexing and is returned as is.
///
/// # Example
///
/// ```
/// use kplc_lex::{tokenize, Symbol};
///
/// let tokens = tokenize("give 1 \\\\ done").unwrap();
/// let symbols: Vec<_> = tokens.into_iter().map(|t| t.symbol).collect();
/// assert_eq!(symbols, vec![Symbol::Give, Symbol::Natural(1), Symbol::End]);
/// ```
pub fn tokenize(source: impl Into<Vec<u8>>) -> LexResult<Vec<Token>> {
    tokenize_with_config(source, LexerConfig::default())
}

/// Lexes `source` to completion with explicit settings.
///
/// Same contract as [`tokenize`].
pub fn tokenize_with_config(
    source: impl Into<Vec<u8>>,
    config: LexerConfig,
) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::with_config(source, config);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.is_comment() {
            continue;
        }
        let end = token.is_end();
        tokens.push(token);
        if end {
            return Ok(tokens);
        }
    }
}
