//! Error handling module for the kplt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use kplc_util::diagnostic::Diagnostic;
use thiserror::Error;

/// Main error type for the kplt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of kplt commands.
#[derive(Error, Debug)]
pub enum KpltError {
    /// A configuration file could not be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source file has a malformed token; carries the rendered fault.
    #[error("{0}")]
    Lex(Box<Diagnostic>),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using KpltError.
pub type Result<T> = std::result::Result<T, KpltError>;
