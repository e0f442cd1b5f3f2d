//! Intermediate AST produced by the grammar
//!
//! Property lists are kept exactly as they appeared; sorting them into typed
//! fields and checking what the grammar cannot express happens in
//! [`super::builders`]. Only choices carry a byte span, since the missing
//! prompt check is the one error raised after parsing.

use std::ops::Range;

use crate::kconfig::ast::{DefaultValue, DependsOn, Expr, KType, Prompt, Property};

#[derive(Debug, Clone)]
pub(crate) enum SymbolNode {
    Config(ConfigNode),
    Menu(MenuNode),
    Choice(ChoiceNode),
}

#[derive(Debug, Clone)]
pub(crate) struct ConfigNode {
    pub(crate) id: String,
    pub(crate) is_menu_config: bool,
    pub(crate) ty: KType,
    pub(crate) properties: Vec<Property>,
    pub(crate) inherited: Option<Expr>,
    pub(crate) children: Vec<SymbolNode>,
}

#[derive(Debug, Clone)]
pub(crate) struct MenuNode {
    pub(crate) title: String,
    pub(crate) depends: Option<DependsOn>,
    pub(crate) children: Vec<SymbolNode>,
}

/// The subset of properties a choice body accepts
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChoiceProperty {
    Prompt(Prompt),
    Default(DefaultValue),
    DependsOn(DependsOn),
}

#[derive(Debug, Clone)]
pub(crate) struct ChoiceNode {
    pub(crate) ty: KType,
    pub(crate) optional: bool,
    pub(crate) properties: Vec<ChoiceProperty>,
    pub(crate) options: Vec<ConfigNode>,
    pub(crate) span: Range<usize>,
}
