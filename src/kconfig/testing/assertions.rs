//! Fluent assertion API for AST nodes

use crate::kconfig::ast::{AstNode, Choice, Config, Expr, KType, Menu, RootMenu, Symbol};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a parsed tree
pub fn assert_ast(root: &RootMenu) -> RootAssertion<'_> {
    RootAssertion { root }
}

fn summarize(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| format!("{}({})", s.node_type(), s.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_child<'a>(
    children: &'a [Symbol],
    index: usize,
    context: &str,
) -> SymbolAssertion<'a> {
    assert!(
        index < children.len(),
        "{}: child index {} out of bounds ({} children)",
        context,
        index,
        children.len()
    );
    SymbolAssertion {
        symbol: &children[index],
        context: format!("{}[{}]", context, index),
    }
}

// ============================================================================
// Root Assertions
// ============================================================================

pub struct RootAssertion<'a> {
    root: &'a RootMenu,
}

impl<'a> RootAssertion<'a> {
    pub fn prompt(self, expected: &str) -> Self {
        assert_eq!(self.root.prompt.text, expected, "root: prompt mismatch");
        self
    }

    /// Assert the number of top-level symbols
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.root.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} symbols, found {}: [{}]",
            expected,
            actual,
            summarize(&self.root.children)
        );
        self
    }

    /// Assert on a specific top-level symbol by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SymbolAssertion<'a>),
    {
        assertion(check_child(&self.root.children, index, "children"));
        self
    }
}

// ============================================================================
// Symbol Assertions
// ============================================================================

pub struct SymbolAssertion<'a> {
    symbol: &'a Symbol,
    context: String,
}

impl<'a> SymbolAssertion<'a> {
    /// Assert this symbol is a config (or menuconfig)
    pub fn assert_config(self) -> ConfigAssertion<'a> {
        match self.symbol {
            Symbol::Config(config) => ConfigAssertion {
                config,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Config, found {} '{}'",
                self.context,
                other.node_type(),
                other.display_label()
            ),
        }
    }

    pub fn assert_menu(self) -> MenuAssertion<'a> {
        match self.symbol {
            Symbol::Menu(menu) => MenuAssertion {
                menu,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Menu, found {} '{}'",
                self.context,
                other.node_type(),
                other.display_label()
            ),
        }
    }

    pub fn assert_choice(self) -> ChoiceAssertion<'a> {
        match self.symbol {
            Symbol::Choice(choice) => ChoiceAssertion {
                choice,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Choice, found {} '{}'",
                self.context,
                other.node_type(),
                other.display_label()
            ),
        }
    }
}

// ============================================================================
// Config Assertions
// ============================================================================

pub struct ConfigAssertion<'a> {
    config: &'a Config,
    context: String,
}

impl<'a> ConfigAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.config.id, expected, "{}: id mismatch", self.context);
        self
    }

    pub fn ty(self, expected: KType) -> Self {
        assert_eq!(self.config.ty, expected, "{}: type mismatch", self.context);
        self
    }

    pub fn menu_config(self, expected: bool) -> Self {
        assert_eq!(
            self.config.is_menu_config, expected,
            "{}: is_menu_config mismatch",
            self.context
        );
        self
    }

    /// Assert the prompt text; `None` asserts there is no prompt
    pub fn prompt(self, expected: Option<&str>) -> Self {
        let actual = self.config.prompt.as_ref().map(|p| p.text.as_str());
        assert_eq!(actual, expected, "{}: prompt mismatch", self.context);
        self
    }

    pub fn prompt_condition(self, expected: &Expr) -> Self {
        let prompt = self
            .config
            .prompt
            .as_ref()
            .unwrap_or_else(|| panic!("{}: expected a prompt", self.context));
        assert_eq!(
            &prompt.condition, expected,
            "{}: prompt condition mismatch",
            self.context
        );
        self
    }

    /// Assert default values and their conditions, in order
    pub fn defaults(self, expected: &[(Expr, Expr)]) -> Self {
        let actual: Vec<(Expr, Expr)> = self
            .config
            .defaults
            .iter()
            .map(|d| (d.value.clone(), d.condition.clone()))
            .collect();
        assert_eq!(actual, expected, "{}: defaults mismatch", self.context);
        self
    }

    /// Assert select targets, in order
    pub fn selects(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.config.selects.iter().map(|s| s.target.as_str()).collect();
        assert_eq!(actual, expected, "{}: selects mismatch", self.context);
        self
    }

    /// Assert each `depends on` condition, in order
    pub fn depends_on(self, expected: &[Expr]) -> Self {
        let actual: Vec<Expr> = self
            .config
            .depends_on
            .iter()
            .map(|d| d.condition.clone())
            .collect();
        assert_eq!(actual, expected, "{}: depends_on mismatch", self.context);
        self
    }

    pub fn range_count(self, expected: usize) -> Self {
        assert_eq!(
            self.config.ranges.len(),
            expected,
            "{}: range count mismatch",
            self.context
        );
        self
    }

    pub fn inherited(self, expected: &Expr) -> Self {
        assert_eq!(
            &self.config.inherited, expected,
            "{}: inherited mismatch",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.config.children.len(),
            expected,
            "{}: Expected {} children, found [{}]",
            self.context,
            expected,
            summarize(&self.config.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SymbolAssertion<'a>),
    {
        let context = format!("{}.children", self.context);
        assertion(check_child(&self.config.children, index, &context));
        self
    }
}

// ============================================================================
// Menu Assertions
// ============================================================================

pub struct MenuAssertion<'a> {
    menu: &'a Menu,
    context: String,
}

impl<'a> MenuAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.menu.prompt.text, expected, "{}: title mismatch", self.context);
        self
    }

    /// Assert the visibility condition taken from the menu's `depends on`
    pub fn condition(self, expected: &Expr) -> Self {
        assert_eq!(
            &self.menu.prompt.condition, expected,
            "{}: condition mismatch",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.menu.children.len(),
            expected,
            "{}: Expected {} children, found [{}]",
            self.context,
            expected,
            summarize(&self.menu.children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SymbolAssertion<'a>),
    {
        let context = format!("{}.children", self.context);
        assertion(check_child(&self.menu.children, index, &context));
        self
    }
}

// ============================================================================
// Choice Assertions
// ============================================================================

pub struct ChoiceAssertion<'a> {
    choice: &'a Choice,
    context: String,
}

impl<'a> ChoiceAssertion<'a> {
    pub fn prompt(self, expected: &str) -> Self {
        assert_eq!(
            self.choice.prompt.text, expected,
            "{}: prompt mismatch",
            self.context
        );
        self
    }

    pub fn boolean(self, expected: bool) -> Self {
        assert_eq!(
            self.choice.is_boolean, expected,
            "{}: is_boolean mismatch",
            self.context
        );
        self
    }

    pub fn mandatory(self, expected: bool) -> Self {
        assert_eq!(
            self.choice.is_mandatory, expected,
            "{}: is_mandatory mismatch",
            self.context
        );
        self
    }

    /// Assert option ids, in order
    pub fn option_ids(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.choice.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(actual, expected, "{}: options mismatch", self.context);
        self
    }

    pub fn default_count(self, expected: usize) -> Self {
        assert_eq!(
            self.choice.defaults.len(),
            expected,
            "{}: default count mismatch",
            self.context
        );
        self
    }
}
