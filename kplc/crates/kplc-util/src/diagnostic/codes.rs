//! Diagnostic codes for categorizing compiler errors.
//!
//! # Examples
//!
//! ```
//! use kplc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::new("E", 1203);
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1203);
//! assert_eq!(code.as_str(), "E1203");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" and `number` is padded to four digits.
///
/// Lexer codes live in `E1000..E2000`; the lexer derives them from its fault
/// module and kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix, "E" for errors
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix of this code
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric part of this code
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the code as a string
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// First code of the lexer range
    pub const LEXER_BASE: u32 = 1000;
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
