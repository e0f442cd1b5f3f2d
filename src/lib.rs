//! # kconfig-extract
//!
//! A parser for the Kconfig extract format: a flattened, bracketed rendition
//! of Linux Kconfig files in which every symbol carries its own properties
//! and nested scopes are delimited by braces.
//!
//! The entry points are [`parse`], [`parse_str`] and [`parse_file`]; each
//! returns the [`RootMenu`](kconfig::ast::RootMenu) wrapping the parsed
//! symbol sequence, or the first error encountered.
//!
//! ## Testing
//!
//! Grammar tests use the fluent helpers in the [testing module](kconfig::testing).

pub mod kconfig;

pub use kconfig::ast::{
    Choice, Config, DefaultValue, DependsOn, Env, Expr, KType, Menu, Prompt, Property,
    RootMenu, Select, Symbol, ValueRange,
};
pub use kconfig::parser::{parse, parse_file, parse_str, KconfigError, KconfigParser, ParseError};
