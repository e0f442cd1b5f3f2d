//! AST definitions for the Kconfig extract format
//!
//! ## Modules
//!
//! - `expr` - boolean/tristate expression tree used for every condition
//! - `property` - property records (prompt, default, select, ...)
//! - `symbol` - configs, menus, choices and the synthetic root menu
//! - `span` - positions and byte-offset conversion for error reporting

pub mod expr;
pub mod property;
pub mod span;
pub mod symbol;

pub use expr::Expr;
pub use property::{DefaultValue, DependsOn, Env, Prompt, Property, Select, ValueRange};
pub use span::{Position, SourceLocation};
pub use symbol::{
    AstNode, Choice, Config, Container, KType, Menu, RootMenu, Symbol, ROOT_PROMPT,
};
