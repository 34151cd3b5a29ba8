//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode};
use crate::span::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic and the column the
/// caret points at.
///
/// # Examples
///
/// ```
/// use kplc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::point("datum x = 0b2", 1, 11);
/// assert!(snippet.format().ends_with("|           ^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column the caret points at (1-based)
    pub column: usize,
}

impl SourceSnippet {
    /// Create a snippet highlighting a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            column,
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line with a caret (^) under the highlighted column.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));
        result.push_str(&" ".repeat(self.column.saturating_sub(1)));
        result.push('^');

        result
    }
}

/// Fluent constructor for [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use kplc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use kplc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("literal has no digits")
///     .code(DiagnosticCode::new("E", 1302))
///     .span(Span::DUMMY)
///     .help("add at least one digit after `0b`")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    message: String,
    file: Option<String>,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Set the code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Name the source the span points into
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the primary span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Finish building
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            file: self.file,
            span: self.span,
            code: self.code,
            helps: self.helps,
            snippets: self.snippets,
        }
    }
}
