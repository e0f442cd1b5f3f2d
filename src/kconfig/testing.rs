//! Testing utilities for AST assertions
//!
//! A fluent API for asserting on parsed trees, so grammar tests read as a
//! description of the expected shape.
//!
//! # Example
//!
//! ```rust
//! use kconfig_extract::kconfig::parser::parse_str;
//! use kconfig_extract::kconfig::testing::assert_ast;
//! use kconfig_extract::kconfig::ast::KType;
//!
//! let root = parse_str("menu \"Net\" { config NET boolean }").unwrap();
//!
//! assert_ast(&root)
//!     .child_count(1)
//!     .child(0, |symbol| {
//!         symbol.assert_menu()
//!             .title("Net")
//!             .child(0, |c| {
//!                 c.assert_config().id("NET").ty(KType::Boolean);
//!             });
//!     });
//! ```

mod assertions;

pub use assertions::{
    assert_ast, ChoiceAssertion, ConfigAssertion, MenuAssertion, RootAssertion, SymbolAssertion,
};
