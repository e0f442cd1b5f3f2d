//! Parser module for the Kconfig extract format
//!
//! Grammar rules live in [`combinators`], [`expr`], [`properties`] and
//! [`symbols`] and produce a span-carrying intermediate tree. The
//! [`builders`] turn that tree into the public AST, and [`api`] wires the
//! lexer, grammar and builders into the entry points.

pub mod api;
mod builders;
mod combinators;
pub mod error;
mod expr;
mod intermediate_ast;
mod properties;
mod symbols;

pub use api::{parse, parse_file, parse_str, KconfigParser};
pub use error::{KconfigError, ParseError};
