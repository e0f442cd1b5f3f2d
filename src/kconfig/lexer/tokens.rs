//! Token definitions for the Kconfig extract format
//!
//! Keywords are matched exactly and take priority over identifiers.
//! Integer and hex literals take priority over identifiers of the same
//! length, so `64` is an integer while `64BIT` stays an identifier.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in the Kconfig extract format
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Symbol keywords
    #[token("config")]
    Config,
    #[token("menuconfig")]
    MenuConfig,
    #[token("menu")]
    Menu,
    #[token("choice")]
    Choice,
    #[token("if")]
    If,
    #[token("optional")]
    Optional,

    // Property keywords
    #[token("prompt")]
    Prompt,
    #[token("depends")]
    Depends,
    #[token("on")]
    On,
    #[token("default")]
    Default,
    #[token("range")]
    Range,
    #[token("select")]
    Select,
    #[token("env")]
    Env,
    #[token("inherited")]
    Inherited,

    // Type keywords
    #[token("boolean")]
    Boolean,
    #[token("tristate")]
    Tristate,
    #[token("integer")]
    Integer,
    #[token("hex")]
    Hex,
    #[token("string")]
    String,

    // Delimiters
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Expression operators
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("!")]
    Not,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,

    /// Quoted string; holds the text between the quotes, escapes untouched
    #[regex(r#""([^"\\\x00-\x1F]|\\[\\/bfnrt"])*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    StrLit(std::string::String),

    #[regex(r"0[xX][0-9a-fA-F]+", |lex| lex.slice().to_string(), priority = 4)]
    HexLit(std::string::String),

    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string(), priority = 3)]
    IntLit(std::string::String),

    #[regex(r"[A-Za-z0-9_]+", |lex| lex.slice().to_string(), priority = 2)]
    Ident(std::string::String),
}

/// Renders the token the way it reads in source, for error messages
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Config => "config",
            Token::MenuConfig => "menuconfig",
            Token::Menu => "menu",
            Token::Choice => "choice",
            Token::If => "if",
            Token::Optional => "optional",
            Token::Prompt => "prompt",
            Token::Depends => "depends",
            Token::On => "on",
            Token::Default => "default",
            Token::Range => "range",
            Token::Select => "select",
            Token::Env => "env",
            Token::Inherited => "inherited",
            Token::Boolean => "boolean",
            Token::Tristate => "tristate",
            Token::Integer => "integer",
            Token::Hex => "hex",
            Token::String => "string",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::And => "&&",
            Token::Or => "||",
            Token::Not => "!",
            Token::Eq => "=",
            Token::NotEq => "!=",
            Token::StrLit(text) => return write!(f, "\"{}\"", text),
            Token::HexLit(text) | Token::IntLit(text) | Token::Ident(text) => text,
        };
        f.write_str(text)
    }
}
