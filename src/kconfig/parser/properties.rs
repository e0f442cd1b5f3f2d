//! Property grammar
//!
//! Each rule has the shape `KEYWORD <payload> [if [ EXPR ]]`, except
//! `inherited`, which carries a bare bracketed expression.

use chumsky::prelude::*;

use crate::kconfig::ast::{
    DefaultValue, DependsOn, Env, Expr, Prompt, Property, Select, ValueRange,
};
use crate::kconfig::lexer::Token;
use crate::kconfig::parser::combinators::{
    ex_expr, identifier, if_clause, string_literal, token, ParserError,
};
use crate::kconfig::parser::expr::id_or_value;
use crate::kconfig::parser::intermediate_ast::ChoiceProperty;

/// `env IDENT [if [..]]`
pub(crate) fn env() -> impl Parser<Token, Env, Error = ParserError> + Clone {
    token(Token::Env)
        .ignore_then(identifier())
        .then(if_clause())
        .map(|(name, condition)| Env { name, condition })
}

/// `prompt STRLIT [if [..]]`
pub(crate) fn prompt() -> impl Parser<Token, Prompt, Error = ParserError> + Clone {
    token(Token::Prompt)
        .ignore_then(string_literal())
        .then(if_clause())
        .map(|(text, condition)| Prompt { text, condition })
}

/// `select IDENT [if [..]]`
pub(crate) fn select() -> impl Parser<Token, Select, Error = ParserError> + Clone {
    token(Token::Select)
        .ignore_then(identifier())
        .then(if_clause())
        .map(|(target, condition)| Select { target, condition })
}

/// `default [..] [if [..]]`
pub(crate) fn default() -> impl Parser<Token, DefaultValue, Error = ParserError> + Clone {
    token(Token::Default)
        .ignore_then(ex_expr())
        .then(if_clause())
        .map(|(value, condition)| DefaultValue { value, condition })
}

/// `range [low high] [if [..]]`
pub(crate) fn range() -> impl Parser<Token, ValueRange, Error = ParserError> + Clone {
    token(Token::Range)
        .ignore_then(
            id_or_value()
                .then(id_or_value())
                .delimited_by(token(Token::LBracket), token(Token::RBracket)),
        )
        .then(if_clause())
        .map(|((low, high), condition)| ValueRange {
            low,
            high,
            condition,
        })
}

/// `depends on [..] [if [..]]`; a guard is folded into the single condition
pub(crate) fn depends() -> impl Parser<Token, DependsOn, Error = ParserError> + Clone {
    token(Token::Depends)
        .ignore_then(token(Token::On))
        .ignore_then(ex_expr())
        .then(if_clause())
        .map(|(condition, guard)| DependsOn::new(condition.conjoin(guard)))
}

/// `inherited [..]`
pub(crate) fn inherited() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    token(Token::Inherited).ignore_then(ex_expr())
}

/// Any property legal inside a config block
pub(crate) fn property() -> impl Parser<Token, Property, Error = ParserError> + Clone {
    choice((
        prompt().map(Property::Prompt),
        depends().map(Property::DependsOn),
        default().map(Property::Default),
        range().map(Property::Range),
        select().map(Property::Select),
        env().map(Property::Env),
    ))
}

/// The properties a choice block accepts
pub(crate) fn choice_property() -> impl Parser<Token, ChoiceProperty, Error = ParserError> + Clone
{
    choice((
        prompt().map(ChoiceProperty::Prompt),
        default().map(ChoiceProperty::Default),
        depends().map(ChoiceProperty::DependsOn),
    ))
}
