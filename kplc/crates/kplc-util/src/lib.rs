//! kplc-util - Core Utilities and Foundation Types
//!
//! This crate holds the small pieces every KPLC compiler phase leans on:
//!
//! - [`span`] - 1-based source positions and inclusive spans
//! - [`text`] - single-byte character classification and text-to-number
//!   conversion
//! - [`diagnostic`] - structured diagnostics, codes, and source snippets
//! - [`error`] - error types raised by the utilities themselves
//!
//! # Examples
//!
//! ```
//! use kplc_util::span::Position;
//! use kplc_util::text;
//!
//! let start = Position::new(1, 1);
//! assert!(text::is_alphabetic(b'k'));
//! assert_eq!(text::convert_to_natural("ff", 16), Ok(255));
//! assert_eq!(start.to_string(), "1:1");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod text;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet};
pub use error::{ConversionError, ConversionResult};
pub use span::{Position, Span};
