//! Symbol grammar: configs, choices, menus and if-blocks
//!
//! Each node parser takes the symbol-sequence parser as an argument so the
//! grammar can recurse into nested scopes. If-blocks return their children
//! for splicing; every other node contributes exactly one element.

use chumsky::prelude::*;

use crate::kconfig::lexer::Token;
use crate::kconfig::parser::combinators::{
    ex_expr, identifier, string_literal, token, type_keyword, ParserError,
};
use crate::kconfig::parser::intermediate_ast::{
    ChoiceNode, ConfigNode, MenuNode, SymbolNode,
};
use crate::kconfig::parser::properties::{choice_property, depends, inherited, property};

/// Build a `config`/`menuconfig` parser
pub(crate) fn build_config_parser<P>(
    symbols: P,
) -> impl Parser<Token, ConfigNode, Error = ParserError> + Clone
where
    P: Parser<Token, Vec<SymbolNode>, Error = ParserError> + Clone,
{
    let keyword = just(Token::Config)
        .to(false)
        .or(just(Token::MenuConfig).to(true));

    let body = property()
        .repeated()
        .then(inherited().or_not())
        .then(symbols)
        .delimited_by(token(Token::LBrace), token(Token::RBrace));

    keyword
        .then(identifier())
        .then(type_keyword())
        .then(body.or_not())
        .map(|(((is_menu_config, id), ty), body)| {
            let ((properties, inherited), children) = body.unwrap_or_default();
            ConfigNode {
                id,
                is_menu_config,
                ty,
                properties,
                inherited,
                children,
            }
        })
}

/// Build a `choice` parser; its options are plain config entries
pub(crate) fn build_choice_parser<C>(
    config: C,
) -> impl Parser<Token, ChoiceNode, Error = ParserError> + Clone
where
    C: Parser<Token, ConfigNode, Error = ParserError> + Clone,
{
    token(Token::Choice)
        .ignore_then(type_keyword())
        .then(just(Token::Optional).or_not().map(|o| o.is_some()))
        .then(
            choice_property()
                .repeated()
                .then(config.repeated())
                .delimited_by(token(Token::LBrace), token(Token::RBrace)),
        )
        .map_with_span(|((ty, optional), (properties, options)), span| ChoiceNode {
            ty,
            optional,
            properties,
            options,
            span,
        })
}

/// Build a `menu` parser
pub(crate) fn build_menu_parser<P>(
    symbols: P,
) -> impl Parser<Token, MenuNode, Error = ParserError> + Clone
where
    P: Parser<Token, Vec<SymbolNode>, Error = ParserError> + Clone,
{
    token(Token::Menu)
        .ignore_then(string_literal())
        .then(
            depends()
                .or_not()
                .then(symbols)
                .delimited_by(token(Token::LBrace), token(Token::RBrace)),
        )
        .map(|(title, (depends, children))| MenuNode {
            title,
            depends,
            children,
        })
}

/// Build an if-block parser. The guard is parsed for validity and dropped.
pub(crate) fn build_if_block_parser<P>(
    symbols: P,
) -> impl Parser<Token, Vec<SymbolNode>, Error = ParserError> + Clone
where
    P: Parser<Token, Vec<SymbolNode>, Error = ParserError> + Clone,
{
    token(Token::If)
        .ignore_then(ex_expr())
        .ignore_then(symbols.delimited_by(token(Token::LBrace), token(Token::RBrace)))
}

/// Zero or more symbols, with if-block children flattened into the sequence
pub(crate) fn symbol_sequence() -> impl Parser<Token, Vec<SymbolNode>, Error = ParserError> + Clone {
    recursive(|symbols: Recursive<'_, Token, Vec<SymbolNode>, ParserError>| {
        let config = build_config_parser(symbols.clone());

        let node = choice((
            build_menu_parser(symbols.clone()).map(SymbolNode::Menu),
            config.clone().map(SymbolNode::Config),
            build_choice_parser(config).map(SymbolNode::Choice),
        ))
        .map(|node| vec![node]);

        node.or(build_if_block_parser(symbols))
            .repeated()
            .flatten()
    })
}

/// The whole input: a symbol sequence followed by end of input
pub(crate) fn kconfig() -> impl Parser<Token, Vec<SymbolNode>, Error = ParserError> + Clone {
    symbol_sequence().then_ignore(end())
}
