//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Lexer struct, session lifecycle and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Natural, machine, real and exponent literals
//! - `operator` - Operator and punctuator lexing
//! - `comment` - Line and block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
