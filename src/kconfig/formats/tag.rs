//! XML-like AST tag serialization
//!
//! Serializes the tree to an XML-like format that mirrors the AST structure.
//!
//! ## Format
//!
//! - Node type → tag name
//! - Id / prompt text → text content
//! - Properties → `<prompt>`, `<default>`, ... tags with a `condition`
//!   attribute when the condition is not always-true
//! - Children and choice options → nested in `<children>` / `<options>`
//!
//! ## Example
//!
//! ```text
//! <root-menu>Linux Kernel Configuration<children>
//!   <menu>Networking<children>
//!     <config type="boolean">NET<prompt>Networking support</prompt></config>
//!   </children></menu>
//! </children></root-menu>
//! ```

use crate::kconfig::ast::{Choice, Config, Container, Expr, Menu, RootMenu, Symbol};

/// Serialize a tree to AST tag format
pub fn serialize_ast_tag(root: &RootMenu) -> String {
    let mut result = String::new();
    result.push_str("<root-menu>");
    result.push_str(&escape_xml(root.label()));
    serialize_children("children", root.children(), 0, &mut result);
    result.push_str("</root-menu>");
    result
}

fn serialize_children(tag: &str, children: &[Symbol], indent_level: usize, output: &mut String) {
    if children.is_empty() {
        return;
    }
    output.push_str(&format!("<{}>\n", tag));
    for child in children {
        serialize_symbol(child, indent_level + 1, output);
    }
    output.push_str(&format!("{}</{}>", "  ".repeat(indent_level), tag));
}

/// Serialize a symbol (recursive)
fn serialize_symbol(symbol: &Symbol, indent_level: usize, output: &mut String) {
    match symbol {
        Symbol::Config(c) => serialize_config(c, indent_level, output),
        Symbol::Menu(m) => serialize_menu(m, indent_level, output),
        Symbol::Choice(c) => serialize_choice(c, indent_level, output),
    }
}

fn serialize_config(config: &Config, indent_level: usize, output: &mut String) {
    let tag = if config.is_menu_config {
        "menuconfig"
    } else {
        "config"
    };
    output.push_str(&format!(
        "{}<{} type=\"{}\">{}",
        "  ".repeat(indent_level),
        tag,
        config.ty,
        escape_xml(&config.id)
    ));

    if let Some(prompt) = &config.prompt {
        property_tag(output, "prompt", &escape_xml(&prompt.text), &prompt.condition);
    }
    for d in &config.depends_on {
        property_tag(output, "depends", &escape_xml(&d.condition.to_string()), &Expr::Yes);
    }
    for d in &config.defaults {
        property_tag(output, "default", &escape_xml(&d.value.to_string()), &d.condition);
    }
    for r in &config.ranges {
        let bounds = format!("{} {}", r.low, r.high);
        property_tag(output, "range", &escape_xml(&bounds), &r.condition);
    }
    for s in &config.selects {
        property_tag(output, "select", &escape_xml(&s.target), &s.condition);
    }
    for e in &config.env {
        property_tag(output, "env", &escape_xml(&e.name), &e.condition);
    }
    if !config.inherited.is_always_true() {
        property_tag(
            output,
            "inherited",
            &escape_xml(&config.inherited.to_string()),
            &Expr::Yes,
        );
    }

    serialize_children("children", &config.children, indent_level, output);
    output.push_str(&format!("</{}>\n", tag));
}

fn serialize_menu(menu: &Menu, indent_level: usize, output: &mut String) {
    output.push_str(&format!("{}<menu", "  ".repeat(indent_level)));
    push_condition(output, &menu.prompt.condition);
    output.push('>');
    output.push_str(&escape_xml(menu.label()));
    serialize_children("children", menu.children(), indent_level, output);
    output.push_str("</menu>\n");
}

fn serialize_choice(choice: &Choice, indent_level: usize, output: &mut String) {
    let ty = if choice.is_boolean { "boolean" } else { "tristate" };
    output.push_str(&format!(
        "{}<choice type=\"{}\" mandatory=\"{}\">{}",
        "  ".repeat(indent_level),
        ty,
        choice.is_mandatory,
        escape_xml(&choice.prompt.text)
    ));
    for d in &choice.depends_on {
        property_tag(output, "depends", &escape_xml(&d.condition.to_string()), &Expr::Yes);
    }
    for d in &choice.defaults {
        property_tag(output, "default", &escape_xml(&d.value.to_string()), &d.condition);
    }

    if !choice.options.is_empty() {
        output.push_str("<options>\n");
        for option in &choice.options {
            serialize_config(option, indent_level + 1, output);
        }
        output.push_str(&format!("{}</options>", "  ".repeat(indent_level)));
    }
    output.push_str("</choice>\n");
}

fn property_tag(output: &mut String, tag: &str, text: &str, condition: &Expr) {
    output.push_str(&format!("<{}", tag));
    push_condition(output, condition);
    output.push_str(&format!(">{}</{}>", text, tag));
}

fn push_condition(output: &mut String, condition: &Expr) {
    if !condition.is_always_true() {
        output.push_str(&format!(
            " condition=\"{}\"",
            escape_xml(&condition.to_string())
        ));
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
