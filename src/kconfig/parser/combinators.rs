//! Shared parser combinators: lexical helpers, type keywords and the
//! bracketed-expression/`if` clause shapes every property reuses.

use chumsky::prelude::*;
use chumsky::select;

use crate::kconfig::ast::{Expr, KType};
use crate::kconfig::lexer::Token;
use crate::kconfig::parser::expr::expr;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Helper: match a specific token, discarding it
pub(crate) fn token(t: Token) -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(t).ignored()
}

/// A quoted string literal, yielding the text between the quotes
pub(crate) fn string_literal() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::StrLit(text) => text }.labelled("string literal")
}

/// A bare identifier, projected to its name
pub(crate) fn identifier() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Ident(name) => name }.labelled("identifier")
}

/// One of the five type keywords
pub(crate) fn type_keyword() -> impl Parser<Token, KType, Error = ParserError> + Clone {
    select! {
        Token::Boolean => KType::Boolean,
        Token::Tristate => KType::Tristate,
        Token::Integer => KType::Integer,
        Token::Hex => KType::Hex,
        Token::String => KType::String,
    }
    .labelled("type")
}

/// `[ EXPR? ]`; empty brackets mean always-true
pub(crate) fn ex_expr() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    expr()
        .or_not()
        .delimited_by(token(Token::LBracket), token(Token::RBracket))
        .map(|e| e.unwrap_or_else(Expr::always_true))
}

/// Optional trailing `if [ EXPR ]`; always-true when absent.
///
/// An `if [..]` followed by `{` opens an if-block instead, so it is left
/// for the enclosing symbol sequence.
pub(crate) fn if_clause() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    token(Token::If)
        .ignore_then(ex_expr())
        .then_ignore(
            filter(|t: &Token| *t != Token::LBrace)
                .ignored()
                .or(end())
                .rewind(),
        )
        .or_not()
        .map(|c| c.unwrap_or_else(Expr::always_true))
}
