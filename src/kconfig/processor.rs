//! Source processing API
//!
//! A processing spec is a `stage-format` string: the stage picks what to
//! extract from the source (the token stream or the parsed tree) and the
//! format picks how to print it.
//!
//! | spec            | output                                      |
//! |-----------------|---------------------------------------------|
//! | `token-simple`  | tokens in source spelling, space separated  |
//! | `token-json`    | token list as JSON                          |
//! | `ast-tag`       | XML-like tag dump                           |
//! | `ast-treeviz`   | box-drawing tree overview                   |
//! | `ast-json`      | tree as JSON                                |
//! | `ast-yaml`      | tree as YAML                                |
//! | `ast-kconfig`   | canonical extract text                      |

use std::fmt;
use std::fs;
use std::path::Path;

use crate::kconfig::ast::RootMenu;
use crate::kconfig::formats::{
    serialize_ast_tag, serialize_extract, to_json_str, to_treeviz_str, to_yaml_str,
};
use crate::kconfig::lexer::{tokenize, Token};
use crate::kconfig::parser::{parse_str, ParseError};

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
    Kconfig,
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Kconfig => "kconfig",
        }
    }
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            "kconfig" => OutputFormat::Kconfig,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.name(),
                spec.stage_name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Tag),
            (ProcessingStage::Ast, OutputFormat::Treeviz),
            (ProcessingStage::Ast, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Yaml),
            (ProcessingStage::Ast, OutputFormat::Kconfig),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }

    fn stage_name(&self) -> &'static str {
        match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage_name(), self.format.name())
    }
}

/// Knobs for rendering; the CLI fills these from its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub pretty_json: bool,
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty_json: true,
            indent: "  ".to_string(),
        }
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    Parse(ParseError),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::Parse(err) => write!(f, "Parse error at {}", err),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

/// Process source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens =
                tokenize(source).map_err(|e| ParseError::from_lex_error(source, e))?;
            format_tokens(&tokens, spec.format, options)
        }
        ProcessingStage::Ast => render_ast(&parse_str(source)?, spec.format, options),
    }
}

/// Render an already parsed tree in one of the AST-stage formats
pub fn render_ast(
    root: &RootMenu,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Tag => Ok(serialize_ast_tag(root)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(root)),
        OutputFormat::Kconfig => Ok(serialize_extract(root, &options.indent)),
        OutputFormat::Json => to_json_str(root, options.pretty_json)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            to_yaml_str(root).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
            "simple format only works with token stage".to_string(),
        )),
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec, options)
}

/// Format tokens according to the specified format
fn format_tokens(
    tokens: &[Token],
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => {
            let json = if options.pretty_json {
                serde_json::to_string_pretty(tokens)
            } else {
                serde_json::to_string(tokens)
            };
            json.map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with ast stage",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processing_spec_parsing() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
        assert_eq!(spec.format, OutputFormat::Simple);

        let spec = ProcessingSpec::from_string("ast-kconfig").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Ast);
        assert_eq!(spec.format, OutputFormat::Kconfig);

        assert!(matches!(
            ProcessingSpec::from_string("invalid"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("token-invalid"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("invalid-simple"),
            Err(ProcessingError::InvalidStage(_))
        ));
    }

    #[test]
    fn test_stage_format_compatibility() {
        assert!(ProcessingSpec::from_string("token-treeviz").is_err());
        assert!(ProcessingSpec::from_string("ast-simple").is_err());
        assert!(ProcessingSpec::from_string("ast-json").is_ok());
    }

    #[test]
    fn test_token_formatting() {
        let options = RenderOptions::default();
        let simple = process_source(
            "config FOO boolean { default [y] }",
            &ProcessingSpec::from_string("token-simple").unwrap(),
            &options,
        )
        .unwrap();
        assert_eq!(simple, "config FOO boolean { default [ y ] }");

        let tokens = tokenize("menu \"M\"").unwrap();
        let json = format_tokens(&tokens, OutputFormat::Json, &options).unwrap();
        assert!(json.contains("\"Menu\""));
        assert!(json.contains("\"StrLit\""));
    }

    #[test]
    fn test_ast_processing_reports_parse_errors() {
        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        let err = process_source("config FOO", &spec, &RenderOptions::default()).unwrap_err();
        match err {
            ProcessingError::Parse(parse_err) => assert!(parse_err.is_at_end_of_input()),
            other => panic!("expected parse error, found {:?}", other),
        }
    }

    #[test]
    fn test_ast_kconfig_uses_indent_option() {
        let spec = ProcessingSpec::from_string("ast-kconfig").unwrap();
        let options = RenderOptions {
            indent: "    ".to_string(),
            ..RenderOptions::default()
        };
        let out = process_source("config A boolean { select B }", &spec, &options).unwrap();
        assert_eq!(out, "config A boolean {\n    select B\n}\n");
    }

    #[test]
    fn test_render_ast_matches_process_source() {
        let source = "menu \"M\" { config A boolean }";
        let root = parse_str(source).unwrap();
        let options = RenderOptions::default();
        let spec = ProcessingSpec::from_string("ast-tag").unwrap();
        assert_eq!(
            render_ast(&root, spec.format, &options).unwrap(),
            process_source(source, &spec, &options).unwrap()
        );
        assert!(render_ast(&root, OutputFormat::Simple, &options).is_err());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 7);
        assert!(formats.contains(&"token-simple".to_string()));
        assert!(formats.contains(&"ast-treeviz".to_string()));
        for format in &formats {
            assert!(ProcessingSpec::from_string(format).is_ok());
        }
    }
}
