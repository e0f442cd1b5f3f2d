//! Treeviz formatter for AST nodes

use crate::kconfig::ast::{AstNode, Config, Container, RootMenu, Symbol};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(root: &RootMenu) -> String {
    let mut result = format!("{}: {}\n", root.node_type(), root.label());
    append_children(&mut result, root.children(), "");
    result
}

fn append_line(result: &mut String, prefix: &str, is_last: bool, node: &dyn AstNode) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let display_label = truncate(&node.display_label(), 40);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        display_label
    ));

    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_symbol(result: &mut String, symbol: &Symbol, prefix: &str, is_last: bool) {
    let new_prefix = append_line(result, prefix, is_last, symbol);

    match symbol {
        Symbol::Config(config) => append_children(result, config.children(), &new_prefix),
        Symbol::Menu(menu) => append_children(result, menu.children(), &new_prefix),
        Symbol::Choice(choice) => append_options(result, &choice.options, &new_prefix),
    }
}

fn append_children(result: &mut String, children: &[Symbol], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_symbol(result, child, prefix, is_last);
    }
}

fn append_options(result: &mut String, options: &[Config], prefix: &str) {
    for (i, option) in options.iter().enumerate() {
        let is_last = i == options.len() - 1;
        let new_prefix = append_line(result, prefix, is_last, option);
        append_children(result, option.children(), &new_prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::ast::{Choice, KType, Menu, Prompt};

    #[test]
    fn test_empty_root() {
        let root = RootMenu::new(Vec::new());
        assert_eq!(to_treeviz_str(&root), "RootMenu: Linux Kernel Configuration\n");
    }

    #[test]
    fn test_nested_tree() {
        let choice = Choice::new(
            Prompt::new("Compression"),
            vec![Config::new("GZIP", KType::Boolean), Config::new("XZ", KType::Boolean)],
        );
        let menu = Menu::new(
            Prompt::new("General setup"),
            vec![
                Symbol::Config(
                    Config::new("SWAP", KType::Boolean).with_prompt(Prompt::new("Swap")),
                ),
                Symbol::Choice(choice),
            ],
        );
        let root = RootMenu::new(vec![
            Symbol::Menu(menu),
            Symbol::Config(Config::menu_config("NET", KType::Boolean)),
        ]);

        insta::assert_snapshot!(to_treeviz_str(&root), @r###"
        RootMenu: Linux Kernel Configuration
        ├─ Menu: General setup
        │ ├─ Config: SWAP boolean 'Swap'
        │ └─ Choice: Compression
        │   ├─ Config: GZIP boolean
        │   └─ Config: XZ boolean
        └─ MenuConfig: NET boolean
        "###);
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let title = "A".repeat(60);
        let root = RootMenu::new(vec![Symbol::Menu(Menu::new(Prompt::new(title), Vec::new()))]);
        let output = to_treeviz_str(&root);
        assert!(output.contains(&format!("Menu: {}...", "A".repeat(40))));
    }
}
