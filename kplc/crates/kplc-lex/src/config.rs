//! Lexer settings.

use serde::Deserialize;

/// Default cap on identifier length, in bytes.
pub const DEFAULT_MAX_IDENTITY_LENGTH: usize = 1024;

/// Settings for a lexing session.
///
/// Every field has a default, so a partial TOML table such as
/// `[lexer]\nstrict_comments = true` deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LexerConfig {
    /// Longest accepted identifier, in bytes
    #[serde(default = "default_max_identity_length")]
    pub max_identity_length: usize,

    /// Fail on a block comment that runs to the end of input instead of
    /// accepting it
    #[serde(default)]
    pub strict_comments: bool,
}

fn default_max_identity_length() -> usize {
    DEFAULT_MAX_IDENTITY_LENGTH
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_identity_length: default_max_identity_length(),
            strict_comments: false,
        }
    }
}
