//! kplt - A command-line tool for the KPL lexer.
//!
//! This is the main entry point for the kplt CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_lex, LexArgs};
use config::{Config, OutputFormat};
use error::{KpltError, Result};

/// kplt - A CLI tool for the KPL lexer
///
/// kplt runs the KPL lexer over source files and dumps the resulting
/// tokens, reporting malformed tokens as diagnostics.
#[derive(Parser, Debug)]
#[command(name = "kplt")]
#[command(author = "KPLC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for the KPL lexer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KPLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KPLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KPLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kplt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Dump the tokens of a source file
    ///
    /// Lexes the file from start to end and prints one token per line,
    /// or a JSON array with `--format json`. The first malformed token
    /// stops the dump with a diagnostic and exit status 1.
    Lex(LexCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to lex
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Include comment tokens in the dump
    #[arg(long)]
    comments: bool,

    /// Fail on a block comment that is never closed
    #[arg(long)]
    strict_comments: bool,

    /// Longest accepted identifier, in bytes (default: from config)
    #[arg(long)]
    max_identity_length: Option<usize>,
}

/// Main entry point for the kplt CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler. Errors are printed to
/// standard error and turn into exit status 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().trim_end());
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with a token dump.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| KpltError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
    }
}

/// Execute the lex command.
///
/// Command-line flags override the configuration file.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let mut lexer = config.lexer;
    lexer.strict_comments |= args.strict_comments;
    if let Some(max) = args.max_identity_length {
        lexer.max_identity_length = max;
    }

    let lex_args = LexArgs {
        file: args.file,
        format: args.format.unwrap_or(config.output.format),
        comments: args.comments || config.output.comments,
        lexer,
    };
    run_lex(lex_args)
}
