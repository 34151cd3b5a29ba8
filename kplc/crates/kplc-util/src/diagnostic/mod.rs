//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating and formatting compiler
//! diagnostics: an error message, its location, a quoted source line and
//! help messages.
//! Compiler phases never print; they return [`Diagnostic`]s and the driver
//! decides how to show them.
//!
//! # Examples
//!
//! ```
//! use kplc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use kplc_util::span::Span;
//!
//! let diag = DiagnosticBuilder::error("unexpected token")
//!     .code(DiagnosticCode::new("E", 2001))
//!     .span(Span::DUMMY)
//!     .help("try checking the syntax")
//!     .build();
//! assert!(diag.format().starts_with("error[E2001]: unexpected token"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Span;
use std::fmt;

/// A lexical error report with its location and rendering material
///
/// Built with [`DiagnosticBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Name of the source the span points into
    pub file: Option<String>,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic as plain text.
    ///
    /// ```text
    /// error[E1301]: binary literal has the wrong format
    ///  --> main.kp:1:7
    ///   1 | datum 0b2
    ///     |       ^
    ///   = help: binary digits are 0 and 1
    /// ```
    pub fn format(&self) -> String {
        let mut result = match self.code {
            Some(code) => format!("error[{}]: {}\n", code, self.message),
            None => format!("error: {}\n", self.message),
        };
        match &self.file {
            Some(file) => result.push_str(&format!(" --> {}:{}\n", file, self.span.start)),
            None => result.push_str(&format!(" --> {}\n", self.span.start)),
        }

        for snippet in &self.snippets {
            result.push_str(&snippet.format());
            result.push('\n');
        }
        for help in &self.helps {
            result.push_str(&format!("  = help: {}\n", help));
        }

        result
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
