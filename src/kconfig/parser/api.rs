//! Public API for the parser.
//!
//! Parsing is all-or-nothing: the first lexical or grammatical failure aborts
//! the parse and no partial tree is returned.

use chumsky::prelude::*;
use chumsky::Stream;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::kconfig::ast::{RootMenu, SourceLocation};
use crate::kconfig::lexer::tokenize_with_spans;
use crate::kconfig::parser::builders::build_root;
use crate::kconfig::parser::error::{KconfigError, ParseError};
use crate::kconfig::parser::symbols::kconfig;

/// Parse extract text held in memory
pub fn parse_str(source: &str) -> Result<RootMenu, ParseError> {
    let tokens = tokenize_with_spans(source).map_err(|e| ParseError::from_lex_error(source, e))?;
    let len = source.len();

    let nodes = kconfig()
        .parse(Stream::from_iter(len..len, tokens.into_iter()))
        .map_err(|errors| ParseError::from_simple(source, errors))?;

    build_root(nodes, &SourceLocation::new(source))
}

/// Read a whole stream and parse it
pub fn parse<R: Read>(reader: R) -> Result<RootMenu, KconfigError> {
    let mut source = String::new();
    BufReader::new(reader).read_to_string(&mut source)?;
    Ok(parse_str(&source)?)
}

/// Open and parse the file at `path`
pub fn parse_file(path: impl AsRef<Path>) -> Result<RootMenu, KconfigError> {
    let file = File::open(path)?;
    parse(file)
}

/// A reusable handle on the extract grammar.
///
/// The grammar itself holds no state, so one value can parse any number of
/// inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct KconfigParser;

impl KconfigParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_str(&self, source: &str) -> Result<RootMenu, ParseError> {
        parse_str(source)
    }

    pub fn parse<R: Read>(&self, reader: R) -> Result<RootMenu, KconfigError> {
        parse(reader)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<RootMenu, KconfigError> {
        parse_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kconfig::ast::{KType, Symbol, ROOT_PROMPT};

    #[test]
    fn test_empty_input() {
        let root = parse_str("").unwrap();
        assert_eq!(root.prompt.text, ROOT_PROMPT);
        assert!(root.children.is_empty());

        let root = parse_str("  \n\t ").unwrap();
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_single_config() {
        let root = parse_str("config FOO boolean").unwrap();
        assert_eq!(root.children.len(), 1);
        let config = root.children[0].as_config().unwrap();
        assert_eq!(config.id, "FOO");
        assert_eq!(config.ty, KType::Boolean);
        assert!(config.is_bare());
    }

    #[test]
    fn test_reader_entry_point() {
        let input = "menu \"M\" { config A boolean }".as_bytes();
        let root = parse(input).unwrap();
        assert!(matches!(root.children[0], Symbol::Menu(_)));
    }

    #[test]
    fn test_lex_error_position() {
        let err = parse_str("config A boolean\nconfig $B boolean").unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 8);
        assert_eq!(err.found.as_deref(), Some("$"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_file("/nonexistent/kconfig.extract").unwrap_err();
        assert!(matches!(err, KconfigError::Io(_)));
    }

    #[test]
    fn test_parser_handle_is_reusable() {
        let parser = KconfigParser::new();
        assert_eq!(parser.parse_str("config A boolean").unwrap().children.len(), 1);
        assert_eq!(parser.parse_str("config A boolean config B hex").unwrap().children.len(), 2);
    }
}
