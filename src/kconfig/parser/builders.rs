//! Builders that turn the grammar's intermediate nodes into final AST nodes
//!
//! Property lists are partitioned by kind here. A config keeps its first
//! prompt (if any); a choice must have one, and a missing prompt is
//! reported as a grammar error at the position of the `choice` keyword.

use crate::kconfig::ast::{
    Choice, Config, Expr, KType, Menu, Prompt, Property, RootMenu, SourceLocation, Symbol,
};
use crate::kconfig::parser::error::ParseError;
use crate::kconfig::parser::intermediate_ast::{
    ChoiceNode, ChoiceProperty, ConfigNode, MenuNode, SymbolNode,
};

/// Wrap the top-level sequence in the synthetic root menu
pub(crate) fn build_root(
    nodes: Vec<SymbolNode>,
    location: &SourceLocation<'_>,
) -> Result<RootMenu, ParseError> {
    Ok(RootMenu::new(build_symbols(nodes, location)?))
}

fn build_symbols(
    nodes: Vec<SymbolNode>,
    location: &SourceLocation<'_>,
) -> Result<Vec<Symbol>, ParseError> {
    nodes
        .into_iter()
        .map(|node| build_symbol(node, location))
        .collect()
}

fn build_symbol(node: SymbolNode, location: &SourceLocation<'_>) -> Result<Symbol, ParseError> {
    match node {
        SymbolNode::Config(c) => Ok(Symbol::Config(build_config(c, location)?)),
        SymbolNode::Menu(m) => Ok(Symbol::Menu(build_menu(m, location)?)),
        SymbolNode::Choice(c) => Ok(Symbol::Choice(build_choice(c, location)?)),
    }
}

fn build_config(
    node: ConfigNode,
    location: &SourceLocation<'_>,
) -> Result<Config, ParseError> {
    let mut config = Config::new(node.id, node.ty);
    config.is_menu_config = node.is_menu_config;
    config.inherited = node.inherited.unwrap_or_else(Expr::always_true);

    for property in node.properties {
        match property {
            Property::Prompt(p) => {
                if config.prompt.is_none() {
                    config.prompt = Some(p);
                }
            }
            Property::Default(d) => config.defaults.push(d),
            Property::Select(s) => config.selects.push(s),
            Property::Range(r) => config.ranges.push(r),
            Property::DependsOn(d) => config.depends_on.push(d),
            Property::Env(e) => config.env.push(e),
        }
    }

    config.children = build_symbols(node.children, location)?;
    Ok(config)
}

fn build_menu(node: MenuNode, location: &SourceLocation<'_>) -> Result<Menu, ParseError> {
    let condition = node
        .depends
        .map_or_else(Expr::always_true, |d| d.condition);
    let prompt = Prompt::new(node.title).with_condition(condition);
    Ok(Menu::new(prompt, build_symbols(node.children, location)?))
}

fn build_choice(
    node: ChoiceNode,
    location: &SourceLocation<'_>,
) -> Result<Choice, ParseError> {
    let position = location.range_start(&node.span);
    let mut prompt = None;
    let mut defaults = Vec::new();
    let mut depends_on = Vec::new();

    for property in node.properties {
        match property {
            ChoiceProperty::Prompt(p) => {
                if prompt.is_none() {
                    prompt = Some(p);
                }
            }
            ChoiceProperty::Default(d) => defaults.push(d),
            ChoiceProperty::DependsOn(d) => depends_on.push(d),
        }
    }

    let prompt =
        prompt.ok_or_else(|| ParseError::custom(position, "choice requires a prompt"))?;

    let options = node
        .options
        .into_iter()
        .map(|option| build_config(option, location))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Choice {
        prompt,
        is_boolean: node.ty == KType::Boolean,
        is_mandatory: !node.optional,
        defaults,
        depends_on,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::ast::{DefaultValue, DependsOn, Select};

    fn config_node(properties: Vec<Property>) -> ConfigNode {
        ConfigNode {
            id: "FOO".to_string(),
            is_menu_config: false,
            ty: KType::Boolean,
            properties,
            inherited: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_config_first_prompt_wins() {
        let location = SourceLocation::new("");
        let node = config_node(vec![
            Property::Prompt(Prompt::new("A")),
            Property::Select(Select::new("S")),
            Property::Prompt(Prompt::new("B")),
        ]);
        let config = build_config(node, &location).unwrap();
        assert_eq!(config.prompt.map(|p| p.text), Some("A".to_string()));
        assert_eq!(config.selects.len(), 1);
        assert!(config.inherited.is_always_true());
    }

    #[test]
    fn test_config_keeps_encounter_order() {
        let location = SourceLocation::new("");
        let node = config_node(vec![
            Property::DependsOn(DependsOn::new(Expr::id("A"))),
            Property::Default(DefaultValue::new(Expr::Mod)),
            Property::DependsOn(DependsOn::new(Expr::id("B"))),
            Property::Default(DefaultValue::new(Expr::Yes)),
        ]);
        let config = build_config(node, &location).unwrap();
        let depends: Vec<&Expr> = config.depends_on.iter().map(|d| &d.condition).collect();
        assert_eq!(depends, vec![&Expr::id("A"), &Expr::id("B")]);
        let defaults: Vec<&Expr> = config.defaults.iter().map(|d| &d.value).collect();
        assert_eq!(defaults, vec![&Expr::Mod, &Expr::Yes]);
        assert!(config.prompt.is_none());
    }

    #[test]
    fn test_choice_without_prompt_is_error() {
        let source = "config X boolean\nchoice boolean { }";
        let location = SourceLocation::new(source);
        let node = ChoiceNode {
            ty: KType::Boolean,
            optional: false,
            properties: Vec::new(),
            options: Vec::new(),
            span: 17..source.len(),
        };
        let err = build_choice(node, &location).unwrap_err();
        assert_eq!(err.message, "choice requires a prompt");
        assert_eq!(err.offset(), 17);
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 1);
    }

    #[test]
    fn test_choice_flags() {
        let location = SourceLocation::new("");
        let node = ChoiceNode {
            ty: KType::Tristate,
            optional: true,
            properties: vec![ChoiceProperty::Prompt(Prompt::new("C"))],
            options: vec![config_node(Vec::new())],
            span: 0..1,
        };
        let choice = build_choice(node, &location).unwrap();
        assert!(!choice.is_boolean);
        assert!(!choice.is_mandatory);
        assert_eq!(choice.options.len(), 1);
    }

    #[test]
    fn test_menu_depends_becomes_prompt_condition() {
        let location = SourceLocation::new("");
        let node = MenuNode {
            title: "Net".to_string(),
            depends: Some(DependsOn::new(Expr::id("NET"))),
            children: Vec::new(),
        };
        let menu = build_menu(node, &location).unwrap();
        assert_eq!(menu.prompt.text, "Net");
        assert_eq!(menu.prompt.condition, Expr::id("NET"));
    }
}
