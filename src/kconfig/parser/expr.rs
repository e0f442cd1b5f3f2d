//! Expression sub-grammar for conditions, defaults and range bounds
//!
//! ```text
//! EXPR      ::= andExpr ( "||" andExpr )*
//! andExpr   ::= cmpExpr ( "&&" cmpExpr )*
//! cmpExpr   ::= unary ( ("=" | "!=") unary )?
//! unary     ::= "!" unary | "(" EXPR ")" | idOrValue
//! idOrValue ::= IDENT | INT | HEX | STRLIT
//! ```
//!
//! The identifiers `y`, `m` and `n` denote the tristate constants.

use chumsky::prelude::*;
use chumsky::select;

use crate::kconfig::ast::Expr;
use crate::kconfig::lexer::Token;
use crate::kconfig::parser::combinators::{token, ParserError};

fn ident_value(name: String) -> Expr {
    match name.as_str() {
        "y" => Expr::Yes,
        "m" => Expr::Mod,
        "n" => Expr::No,
        _ => Expr::Id(name),
    }
}

/// A single identifier or literal value
pub(crate) fn id_or_value() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    select! {
        Token::Ident(name) => ident_value(name),
        Token::IntLit(value) => Expr::Int(value),
        Token::HexLit(text) => Expr::Hex(text),
        Token::StrLit(text) => Expr::Literal(text),
    }
    .labelled("identifier or value")
}

/// A full boolean/tristate expression
pub(crate) fn expr() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expr: Recursive<'_, Token, Expr, ParserError>| {
        let atom = id_or_value().or(expr.delimited_by(token(Token::LParen), token(Token::RParen)));

        let unary = token(Token::Not)
            .repeated()
            .then(atom)
            .foldr(|_, operand| Expr::not(operand));

        let comparison = unary
            .clone()
            .then(
                just(Token::Eq)
                    .to(true)
                    .or(just(Token::NotEq).to(false))
                    .then(unary)
                    .or_not(),
            )
            .map(|(lhs, rhs)| match rhs {
                Some((true, rhs)) => Expr::eq(lhs, rhs),
                Some((false, rhs)) => Expr::not_eq(lhs, rhs),
                None => lhs,
            });

        let conjunction = comparison
            .clone()
            .then(token(Token::And).ignore_then(comparison).repeated())
            .foldl(Expr::and);

        conjunction
            .clone()
            .then(token(Token::Or).ignore_then(conjunction).repeated())
            .foldl(Expr::or)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::parser::test_support::parse_tokens;

    #[test]
    fn test_tristate_constants() {
        assert_eq!(parse_tokens(expr(), "y").unwrap(), Expr::Yes);
        assert_eq!(parse_tokens(expr(), "m").unwrap(), Expr::Mod);
        assert_eq!(parse_tokens(expr(), "n").unwrap(), Expr::No);
    }

    #[test]
    fn test_values() {
        assert_eq!(parse_tokens(id_or_value(), "NR_CPUS").unwrap(), Expr::id("NR_CPUS"));
        assert_eq!(parse_tokens(id_or_value(), "-8").unwrap(), Expr::int(-8));
        assert_eq!(
            parse_tokens(id_or_value(), "0xC0000000").unwrap(),
            Expr::Hex("0xC0000000".to_string())
        );
        assert_eq!(
            parse_tokens(id_or_value(), "\"lzma\"").unwrap(),
            Expr::Literal("lzma".to_string())
        );
    }

    #[test]
    fn test_precedence() {
        let parsed = parse_tokens(expr(), "A || B && !C").unwrap();
        assert_eq!(
            parsed,
            Expr::or(
                Expr::id("A"),
                Expr::and(Expr::id("B"), Expr::not(Expr::id("C")))
            )
        );
    }

    #[test]
    fn test_left_associative() {
        let parsed = parse_tokens(expr(), "A && B && C").unwrap();
        assert_eq!(
            parsed,
            Expr::and(Expr::and(Expr::id("A"), Expr::id("B")), Expr::id("C"))
        );
    }

    #[test]
    fn test_parentheses_and_comparison() {
        let parsed = parse_tokens(expr(), "!(ARCH=\"um\") && (X86 || ARM!=n)").unwrap();
        assert_eq!(
            parsed,
            Expr::and(
                Expr::not(Expr::eq(Expr::id("ARCH"), Expr::Literal("um".to_string()))),
                Expr::or(Expr::id("X86"), Expr::not_eq(Expr::id("ARM"), Expr::No))
            )
        );
    }

    #[test]
    fn test_rejects_dangling_operator() {
        assert!(parse_tokens(expr(), "A &&").is_err());
        assert!(parse_tokens(expr(), "(A").is_err());
    }
}
