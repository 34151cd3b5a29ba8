//! Single-byte text utilities.
//!
//! Character classification works on raw bytes only; anything outside ASCII
//! is neither whitespace, alphabetic nor numeric. The conversions turn digit
//! text (already stripped of separators) into machine numbers and report the
//! two ways that can go wrong through [`ConversionError`].

use std::num::IntErrorKind;

use crate::error::{ConversionError, ConversionResult};

/// Space, horizontal tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// `a`-`z` or `A`-`Z`.
#[inline]
pub const fn is_alphabetic(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// `0`-`9`.
#[inline]
pub const fn is_numeric(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Alphabetic or numeric.
#[inline]
pub const fn is_alphanumeric(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// `0`-`9`, `a`-`f` or `A`-`F`.
#[inline]
pub const fn is_hexadecimal(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// `0` or `1`.
#[inline]
pub const fn is_binary(byte: u8) -> bool {
    matches!(byte, b'0' | b'1')
}

/// Convert unsigned digit text in `radix` to a `u64`.
///
/// # Errors
///
/// [`ConversionError::InvalidArgument`] for empty text, a sign, or a
/// character that is not a digit of `radix`;
/// [`ConversionError::OutOfRange`] if the value exceeds `u64::MAX`.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
///
/// # Examples
///
/// ```
/// use kplc_util::text::convert_to_natural;
/// use kplc_util::ConversionError;
///
/// assert_eq!(convert_to_natural("1010", 2), Ok(10));
/// assert_eq!(convert_to_natural("1g", 16), Err(ConversionError::InvalidArgument));
/// ```
pub fn convert_to_natural(text: &str, radix: u32) -> ConversionResult<u64> {
    if text.starts_with(['+', '-']) {
        return Err(ConversionError::InvalidArgument);
    }
    u64::from_str_radix(text, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::OutOfRange,
        _ => ConversionError::InvalidArgument,
    })
}

/// Convert decimal digit text to an `i64`.
///
/// # Errors
///
/// Same classification as [`convert_to_natural`], against the `i64` range.
pub fn convert_to_integer(text: &str) -> ConversionResult<i64> {
    if text.starts_with(['+', '-']) {
        return Err(ConversionError::InvalidArgument);
    }
    text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::OutOfRange,
        _ => ConversionError::InvalidArgument,
    })
}

/// Convert decimal real text (`digits[.digits][e[+-]digits]`) to an `f64`.
///
/// Spellings such as `inf` or `NaN` that the standard parser accepts are
/// rejected.
///
/// # Errors
///
/// [`ConversionError::InvalidArgument`] if the text is not a real literal;
/// [`ConversionError::OutOfRange`] if the value is not finite.
///
/// # Examples
///
/// ```
/// use kplc_util::text::convert_to_real;
/// use kplc_util::ConversionError;
///
/// assert_eq!(convert_to_real("2.5e1"), Ok(25.0));
/// assert_eq!(convert_to_real("1e999"), Err(ConversionError::OutOfRange));
/// ```
pub fn convert_to_real(text: &str) -> ConversionResult<f64> {
    let well_formed = text.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed {
        return Err(ConversionError::InvalidArgument);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ConversionError::OutOfRange),
        Err(_) => Err(ConversionError::InvalidArgument),
    }
}
