//! Symbol nodes: configs, menus, choices and the synthetic root menu

use super::expr::Expr;
use super::property::{DefaultValue, DependsOn, Env, Prompt, Select, ValueRange};
use serde::Serialize;
use std::fmt;

/// Prompt text of the synthesized top-level menu
pub const ROOT_PROMPT: &str = "Linux Kernel Configuration";

// ============================================================================
// AST Traits - Common interfaces for uniform node access
// ============================================================================

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// Trait for nodes that contain nested symbols
pub trait Container: AstNode {
    fn label(&self) -> &str;
    fn children(&self) -> &[Symbol];
}

// ============================================================================
// Node Definitions
// ============================================================================

/// Value type declared by a config or choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KType {
    Boolean,
    Tristate,
    Integer,
    Hex,
    String,
}

impl KType {
    pub const ALL: [KType; 5] = [
        KType::Boolean,
        KType::Tristate,
        KType::Integer,
        KType::Hex,
        KType::String,
    ];

    /// The keyword spelling of this type
    pub fn keyword(self) -> &'static str {
        match self {
            KType::Boolean => "boolean",
            KType::Tristate => "tristate",
            KType::Integer => "integer",
            KType::Hex => "hex",
            KType::String => "string",
        }
    }
}

impl fmt::Display for KType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `config` or `menuconfig` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub id: String,
    pub is_menu_config: bool,
    pub ty: KType,
    /// Visibility inherited from enclosing scopes (`inherited [..]`)
    pub inherited: Expr,
    /// First prompt among the properties, if any
    pub prompt: Option<Prompt>,
    pub defaults: Vec<DefaultValue>,
    pub selects: Vec<Select>,
    pub ranges: Vec<ValueRange>,
    /// Independent guards; a consumer conjoins them
    pub depends_on: Vec<DependsOn>,
    pub env: Vec<Env>,
    pub children: Vec<Symbol>,
}

impl Config {
    pub fn new(id: impl Into<String>, ty: KType) -> Self {
        Self {
            id: id.into(),
            is_menu_config: false,
            ty,
            inherited: Expr::always_true(),
            prompt: None,
            defaults: Vec::new(),
            selects: Vec::new(),
            ranges: Vec::new(),
            depends_on: Vec::new(),
            env: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn menu_config(id: impl Into<String>, ty: KType) -> Self {
        Self {
            is_menu_config: true,
            ..Self::new(id, ty)
        }
    }

    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_children(mut self, children: Vec<Symbol>) -> Self {
        self.children = children;
        self
    }

    /// True when the node carries nothing beyond its header
    pub fn is_bare(&self) -> bool {
        self.inherited.is_always_true()
            && self.prompt.is_none()
            && self.defaults.is_empty()
            && self.selects.is_empty()
            && self.ranges.is_empty()
            && self.depends_on.is_empty()
            && self.env.is_empty()
            && self.children.is_empty()
    }
}

/// A `menu "title" { .. }` grouping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Menu {
    /// Title; its condition is the menu's `depends on` guard
    pub prompt: Prompt,
    pub children: Vec<Symbol>,
}

impl Menu {
    pub fn new(prompt: Prompt, children: Vec<Symbol>) -> Self {
        Self { prompt, children }
    }
}

/// A `choice` group of mutually exclusive configs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub prompt: Prompt,
    pub is_boolean: bool,
    pub is_mandatory: bool,
    pub defaults: Vec<DefaultValue>,
    pub depends_on: Vec<DependsOn>,
    pub options: Vec<Config>,
}

impl Choice {
    pub fn new(prompt: Prompt, options: Vec<Config>) -> Self {
        Self {
            prompt,
            is_boolean: true,
            is_mandatory: true,
            defaults: Vec::new(),
            depends_on: Vec::new(),
            options,
        }
    }
}

/// Any node that can appear in a symbol sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "symbol")]
pub enum Symbol {
    Config(Config),
    Menu(Menu),
    Choice(Choice),
}

impl Symbol {
    pub fn as_config(&self) -> Option<&Config> {
        match self {
            Symbol::Config(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_menu(&self) -> Option<&Menu> {
        match self {
            Symbol::Menu(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&Choice> {
        match self {
            Symbol::Choice(c) => Some(c),
            _ => None,
        }
    }
}

/// The synthesized top-level menu holding the whole parsed sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootMenu {
    pub prompt: Prompt,
    pub children: Vec<Symbol>,
}

impl RootMenu {
    pub fn new(children: Vec<Symbol>) -> Self {
        Self {
            prompt: Prompt::new(ROOT_PROMPT),
            children,
        }
    }

    /// Count every node in the tree, choice options included
    pub fn node_count(&self) -> usize {
        fn count(symbols: &[Symbol]) -> usize {
            symbols
                .iter()
                .map(|symbol| match symbol {
                    Symbol::Config(c) => 1 + count(&c.children),
                    Symbol::Menu(m) => 1 + count(&m.children),
                    Symbol::Choice(c) => {
                        1 + c.options.iter().map(|o| 1 + count(&o.children)).sum::<usize>()
                    }
                })
                .sum()
        }
        count(&self.children)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl AstNode for Config {
    fn node_type(&self) -> &'static str {
        if self.is_menu_config {
            "MenuConfig"
        } else {
            "Config"
        }
    }
    fn display_label(&self) -> String {
        match &self.prompt {
            Some(prompt) => format!("{} {} '{}'", self.id, self.ty, prompt.text),
            None => format!("{} {}", self.id, self.ty),
        }
    }
}

impl Container for Config {
    fn label(&self) -> &str {
        &self.id
    }
    fn children(&self) -> &[Symbol] {
        &self.children
    }
}

impl AstNode for Menu {
    fn node_type(&self) -> &'static str {
        "Menu"
    }
    fn display_label(&self) -> String {
        self.prompt.text.clone()
    }
}

impl Container for Menu {
    fn label(&self) -> &str {
        &self.prompt.text
    }
    fn children(&self) -> &[Symbol] {
        &self.children
    }
}

impl AstNode for Choice {
    fn node_type(&self) -> &'static str {
        "Choice"
    }
    fn display_label(&self) -> String {
        self.prompt.text.clone()
    }
}

impl AstNode for RootMenu {
    fn node_type(&self) -> &'static str {
        "RootMenu"
    }
    fn display_label(&self) -> String {
        self.prompt.text.clone()
    }
}

impl Container for RootMenu {
    fn label(&self) -> &str {
        &self.prompt.text
    }
    fn children(&self) -> &[Symbol] {
        &self.children
    }
}

impl AstNode for Symbol {
    fn node_type(&self) -> &'static str {
        match self {
            Symbol::Config(c) => c.node_type(),
            Symbol::Menu(m) => m.node_type(),
            Symbol::Choice(c) => c.node_type(),
        }
    }
    fn display_label(&self) -> String {
        match self {
            Symbol::Config(c) => c.display_label(),
            Symbol::Menu(m) => m.display_label(),
            Symbol::Choice(c) => c.display_label(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Config(c) => write!(
                f,
                "{}('{}', {} children)",
                c.node_type(),
                c.id,
                c.children.len()
            ),
            Symbol::Menu(m) => write!(
                f,
                "Menu('{}', {} children)",
                m.prompt.text,
                m.children.len()
            ),
            Symbol::Choice(c) => write!(
                f,
                "Choice('{}', {} options)",
                c.prompt.text,
                c.options.len()
            ),
        }
    }
}
