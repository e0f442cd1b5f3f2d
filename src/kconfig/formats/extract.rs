//! Re-serialization to the extract grammar
//!
//! Output is canonical: one property per line, always-true `if` clauses and
//! empty bodies omitted, if-blocks already flattened by the parser. Parsing
//! the output yields a tree equal to the input tree.

use crate::kconfig::ast::{Choice, Config, Expr, Menu, RootMenu, Symbol};

/// Serialize a tree with the given indentation unit
pub fn serialize_extract(root: &RootMenu, indent: &str) -> String {
    let mut writer = ExtractWriter {
        indent,
        output: String::new(),
    };
    for symbol in &root.children {
        writer.symbol(symbol, 0);
    }
    writer.output
}

struct ExtractWriter<'a> {
    indent: &'a str,
    output: String,
}

impl ExtractWriter<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(self.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn symbol(&mut self, symbol: &Symbol, depth: usize) {
        match symbol {
            Symbol::Config(c) => self.config(c, depth),
            Symbol::Menu(m) => self.menu(m, depth),
            Symbol::Choice(c) => self.choice(c, depth),
        }
    }

    fn config(&mut self, config: &Config, depth: usize) {
        let keyword = if config.is_menu_config {
            "menuconfig"
        } else {
            "config"
        };
        let header = format!("{} {} {}", keyword, config.id, config.ty);
        if config.is_bare() {
            self.line(depth, &header);
            return;
        }

        self.line(depth, &format!("{} {{", header));
        let inner = depth + 1;
        if let Some(prompt) = &config.prompt {
            self.line(inner, &format!("prompt \"{}\"{}", prompt.text, guard(&prompt.condition)));
        }
        for d in &config.depends_on {
            self.line(inner, &format!("depends on [{}]", d.condition));
        }
        for d in &config.defaults {
            self.line(inner, &format!("default [{}]{}", d.value, guard(&d.condition)));
        }
        for r in &config.ranges {
            self.line(
                inner,
                &format!("range [{} {}]{}", r.low, r.high, guard(&r.condition)),
            );
        }
        for s in &config.selects {
            self.line(inner, &format!("select {}{}", s.target, guard(&s.condition)));
        }
        for e in &config.env {
            self.line(inner, &format!("env {}{}", e.name, guard(&e.condition)));
        }
        if !config.inherited.is_always_true() {
            self.line(inner, &format!("inherited [{}]", config.inherited));
        }
        for child in &config.children {
            self.symbol(child, inner);
        }
        self.line(depth, "}");
    }

    fn menu(&mut self, menu: &Menu, depth: usize) {
        self.line(depth, &format!("menu \"{}\" {{", menu.prompt.text));
        if !menu.prompt.condition.is_always_true() {
            self.line(depth + 1, &format!("depends on [{}]", menu.prompt.condition));
        }
        for child in &menu.children {
            self.symbol(child, depth + 1);
        }
        self.line(depth, "}");
    }

    fn choice(&mut self, choice: &Choice, depth: usize) {
        let ty = if choice.is_boolean { "boolean" } else { "tristate" };
        let optional = if choice.is_mandatory { "" } else { " optional" };
        self.line(depth, &format!("choice {}{} {{", ty, optional));

        let inner = depth + 1;
        let prompt = &choice.prompt;
        self.line(inner, &format!("prompt \"{}\"{}", prompt.text, guard(&prompt.condition)));
        for d in &choice.defaults {
            self.line(inner, &format!("default [{}]{}", d.value, guard(&d.condition)));
        }
        for d in &choice.depends_on {
            self.line(inner, &format!("depends on [{}]", d.condition));
        }
        for option in &choice.options {
            self.config(option, inner);
        }
        self.line(depth, "}");
    }
}

fn guard(condition: &Expr) -> String {
    if condition.is_always_true() {
        String::new()
    } else {
        format!(" if [{}]", condition)
    }
}
