//! Configuration module for the kplt CLI.
//!
//! This module handles loading configuration settings for the kplt
//! application from a TOML file.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use kplc_lex::LexerConfig;
use serde::Deserialize;

use crate::error::{KpltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kplt.toml";

/// How a token dump is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `span  symbol` line per token
    #[default]
    Text,
    /// A JSON array of tokens
    Json,
}

/// Application configuration structure.
///
/// ```toml
/// verbose = false
///
/// [lexer]
/// max_identity_length = 1024
/// strict_comments = false
///
/// [output]
/// format = "text"
/// comments = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token dump options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Include comment tokens in the dump.
    #[serde(default)]
    pub comments: bool,
}

impl Config {
    /// Load configuration from the current directory.
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::check_current_dir_config() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(KpltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| KpltError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
