//! Core error types for kplc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for text-to-number conversion
///
/// The two variants mirror the two ways a conversion can be refused: the
/// text is not a number in the requested base at all, or it is one but the
/// value does not fit the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The text is empty or contains a character that is not a digit of the
    /// requested base
    #[error("invalid argument: text is not a number in the requested base")]
    InvalidArgument,

    /// The value is too large (or, for reals, not finite) for the target type
    #[error("out of range: value does not fit the target type")]
    OutOfRange,
}

/// Result type alias for conversion operations
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
