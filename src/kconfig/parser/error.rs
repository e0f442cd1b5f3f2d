//! Error types for parsing
//!
//! Two kinds of failure exist: the input could not be read ([`KconfigError::Io`])
//! or it does not match the grammar ([`ParseError`]). Neither is retried or
//! recovered from.

use chumsky::error::{Simple, SimpleReason};
use std::fmt;
use std::io;

use crate::kconfig::ast::{Position, SourceLocation};
use crate::kconfig::lexer::{LexError, Token};

/// The first point at which the input stops matching the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: Position,
    /// What the grammar would have accepted here, sorted
    pub expected: Vec<String>,
    /// The offending token; `None` at end of input
    pub found: Option<String>,
    pub message: String,
}

impl ParseError {
    /// An error that carries only a message, such as a failed structural check
    pub fn custom(position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            expected: Vec::new(),
            found: None,
            message: message.into(),
        }
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// 1-based line number
    pub fn line(&self) -> usize {
        self.position.line + 1
    }

    /// 1-based column number, counted in characters
    pub fn column(&self) -> usize {
        self.position.column + 1
    }

    pub fn expects(&self, what: &str) -> bool {
        self.expected.iter().any(|e| e == what)
    }

    /// True when the grammar ran out of input while expecting more
    pub fn is_at_end_of_input(&self) -> bool {
        self.found.is_none() && !self.expected.is_empty()
    }

    pub(crate) fn from_lex_error(source: &str, error: LexError) -> Self {
        let position = SourceLocation::new(source).byte_to_position(error.span.start);
        Self {
            position,
            expected: Vec::new(),
            found: Some(error.slice.clone()),
            message: error.to_string(),
        }
    }

    /// Pick the furthest chumsky error and turn it into a positioned message
    pub(crate) fn from_simple(source: &str, errors: Vec<Simple<Token>>) -> Self {
        let location = SourceLocation::new(source);
        match errors.into_iter().max_by_key(|e| e.span().start) {
            Some(error) => Self::from_single(&location, error),
            None => Self::custom(location.byte_to_position(0), "unknown parse failure"),
        }
    }

    fn from_single(location: &SourceLocation<'_>, error: Simple<Token>) -> Self {
        let position = location.byte_to_position(error.span().start);
        let found = error.found().map(|t| t.to_string());

        let mut expected: Vec<String> = error
            .expected()
            .map(|e| match e {
                Some(token) => format!("'{}'", token),
                None => "end of input".to_string(),
            })
            .collect();
        if let Some(label) = error.label() {
            expected.push(label.to_string());
        }
        expected.sort();
        expected.dedup();

        let found_text = found
            .as_ref()
            .map_or_else(|| "end of input".to_string(), |t| format!("'{}'", t));

        let message = match error.reason() {
            SimpleReason::Custom(msg) => msg.clone(),
            SimpleReason::Unclosed { delimiter, .. } => {
                format!("unclosed delimiter '{}', found {}", delimiter, found_text)
            }
            SimpleReason::Unexpected if expected.is_empty() => {
                format!("unexpected {}", found_text)
            }
            SimpleReason::Unexpected => {
                format!("expected {}, found {}", expected.join(" or "), found_text)
            }
        };

        Self {
            position,
            expected,
            found,
            message,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Failure of an entry point that reads its input itself
#[derive(Debug)]
pub enum KconfigError {
    /// The input could not be opened or read
    Io(io::Error),
    /// The input was read but does not match the grammar
    Parse(ParseError),
}

impl fmt::Display for KconfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KconfigError::Io(err) => write!(f, "I/O error: {}", err),
            KconfigError::Parse(err) => write!(f, "parse error at {}", err),
        }
    }
}

impl std::error::Error for KconfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KconfigError::Io(err) => Some(err),
            KconfigError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for KconfigError {
    fn from(err: io::Error) -> Self {
        KconfigError::Io(err)
    }
}

impl From<ParseError> for KconfigError {
    fn from(err: ParseError) -> Self {
        KconfigError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Error as _;

    #[test]
    fn test_from_simple_reports_expected_tokens() {
        let source = "menu \"A\" {";
        let error = Simple::expected_input_found(
            10..10,
            vec![Some(Token::RBrace), Some(Token::Config)],
            None,
        );
        let err = ParseError::from_simple(source, vec![error]);
        assert_eq!(err.offset(), 10);
        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 11);
        assert!(err.expects("'}'"));
        assert!(err.expects("'config'"));
        assert_eq!(err.found, None);
        assert_eq!(err.message, "expected 'config' or '}', found end of input");
    }

    #[test]
    fn test_from_simple_picks_furthest_error() {
        let source = "config A boolean }";
        let near = Simple::expected_input_found(0..6, vec![Some(Token::Menu)], Some(Token::Config));
        let far = Simple::expected_input_found(17..18, vec![None], Some(Token::RBrace));
        let err = ParseError::from_simple(source, vec![near, far]);
        assert_eq!(err.offset(), 17);
        assert_eq!(err.found.as_deref(), Some("}"));
        assert!(err.expects("end of input"));
    }

    #[test]
    fn test_custom_error_display() {
        let err = ParseError::custom(Position::new(5, 1, 2), "choice requires a prompt");
        assert_eq!(err.to_string(), "2:3: choice requires a prompt");
    }

    #[test]
    fn test_kconfig_error_wraps_sources() {
        let io_err: KconfigError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(io_err, KconfigError::Io(_)));
        assert!(io_err.to_string().starts_with("I/O error"));

        let parse_err: KconfigError =
            ParseError::custom(Position::new(0, 0, 0), "bad").into();
        assert_eq!(parse_err.to_string(), "parse error at 1:1: bad");
    }
}
