//! Lexer module for the Kconfig extract format
//!
//! The format is whitespace-insensitive: braces delimit scopes and brackets
//! delimit expressions, so a plain logos lexer that skips whitespace is all
//! the parser needs. Every token keeps its byte span so grammar errors can
//! point back into the source.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, LexError};
pub use tokens::Token;
