//! Output formats for parsed trees
//!
//! - `extract`: canonical re-serialization to the extract grammar
//! - `tag`: XML-like tag dump
//! - `treeviz`: box-drawing tree overview
//!
//! JSON and YAML come straight from the serde derives on the AST.

pub mod extract;
pub mod tag;
pub mod treeviz;

pub use extract::serialize_extract;
pub use tag::serialize_ast_tag;
pub use treeviz::to_treeviz_str;

use crate::kconfig::ast::RootMenu;

pub fn to_json_str(root: &RootMenu, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(root)
    } else {
        serde_json::to_string(root)
    }
}

pub fn to_yaml_str(root: &RootMenu) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(root)
}
