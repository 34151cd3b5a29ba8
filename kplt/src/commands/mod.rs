//! Command modules for the kplt CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod lex;

pub use lex::{run_lex, LexArgs};
