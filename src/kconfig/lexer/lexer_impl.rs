//! Implementation of the Kconfig extract lexer
//!
//! Tokenization is handled entirely by logos; these helpers collect the
//! token stream together with byte spans for the parser.

use crate::kconfig::lexer::tokens::Token;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// A stretch of input no token accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Range<usize>,
    pub slice: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected character sequence '{}'", self.slice)
    }
}

impl std::error::Error for LexError {}

/// Tokenize a string, stopping at the first unrecognized input
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError {
                    span: lexer.span(),
                    slice: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

/// Convenience function to tokenize a string, dropping spans
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("config FOO boolean").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Config,
                Token::Ident("FOO".to_string()),
                Token::Boolean
            ]
        );
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize_with_spans("menu \"A\" {\n}").unwrap();
        let spans: Vec<Range<usize>> = tokens.into_iter().map(|(_, s)| s).collect();
        assert_eq!(spans, vec![0..4, 5..8, 9..10, 11..12]);
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(tokenize(" \n\t\r\n").unwrap(), Vec::<Token>::new());
    }

    #[test]
    fn test_unknown_character_reports_span() {
        let err = tokenize_with_spans("config A boolean { @ }").unwrap_err();
        assert_eq!(err.span, 19..20);
        assert_eq!(err.slice, "@");
        assert_eq!(err.to_string(), "unexpected character sequence '@'");
    }
}
