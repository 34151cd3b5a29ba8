//! Lex command implementation.
//!
//! Runs the lexer over one source file and dumps the tokens as text or
//! JSON. The first fault stops the dump and is reported as a diagnostic.

use std::io::{self, Write};
use std::path::PathBuf;

use kplc_lex::{Lexer, LexerConfig, Token};
use kplc_util::span::SourceText;
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::error::{KpltError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Source file to lex.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Include comment tokens.
    pub comments: bool,
    /// Lexer settings.
    pub lexer: LexerConfig,
}

/// Execute the lex command, writing to standard output.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_lex_to(&args, &mut out)
}

/// Execute the lex command, writing to `out`.
pub fn run_lex_to(args: &LexArgs, out: &mut impl Write) -> Result<()> {
    info!(file = %args.file.display(), "lexing");

    let content = std::fs::read(&args.file)?;
    let source = SourceText::new(args.file.display().to_string(), content);

    let tokens = collect_tokens(&source, args)?;
    debug!(count = tokens.len(), "tokens collected");

    match args.format {
        OutputFormat::Text => {
            for token in &tokens {
                writeln!(out, "{}  {}", token.span, token.symbol)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        },
    }

    out.flush()?;
    Ok(())
}

/// Lexes `source` through the end token, dropping comments unless asked
/// to keep them.
fn collect_tokens(source: &SourceText, args: &LexArgs) -> Result<Vec<Token>> {
    let mut lexer = Lexer::with_config(source.content(), args.lexer.clone());
    let mut tokens = Vec::new();

    loop {
        let token = lexer
            .next_token()
            .map_err(|fault| KpltError::Lex(Box::new(fault.to_diagnostic(source))))?;

        if token.is_comment() && !args.comments {
            continue;
        }
        let end = token.is_end();
        tokens.push(token);
        if end {
            return Ok(tokens);
        }
    }
}
