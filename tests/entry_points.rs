//! The three parse entry points: in-memory text, readers and file paths.

use std::io::{self, Read, Write};

use kconfig_extract::kconfig::ast::ROOT_PROMPT;
use kconfig_extract::{parse, parse_file, parse_str, KconfigError, KconfigParser};

const SAMPLE: &str = r#"
menu "Processor type and features" {
    config SMP boolean {
        prompt "Symmetric multi-processing support"
        select USE_GENERIC_SMP_HELPERS if [X86_64]
    }
    config NR_CPUS integer {
        prompt "Maximum number of CPUs"
        range [2 512] if [SMP]
        default [8]
        depends on [SMP]
    }
}
"#;

#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let root = parse_file(file.path()).expect("sample to parse");
    assert_eq!(root.prompt.text, ROOT_PROMPT);
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.node_count(), 3);
}

#[test]
fn test_all_entry_points_agree() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");

    let from_str = parse_str(SAMPLE).unwrap();
    let from_reader = parse(SAMPLE.as_bytes()).unwrap();
    let from_file = parse_file(file.path()).unwrap();
    let from_handle = KconfigParser::new().parse_file(file.path()).unwrap();

    assert_eq!(from_str, from_reader);
    assert_eq!(from_str, from_file);
    assert_eq!(from_str, from_handle);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = parse_file(dir.path().join("absent.extract")).unwrap_err();
    match err {
        KconfigError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotFound),
        other => panic!("expected I/O error, found {:?}", other),
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device went away"))
    }
}

#[test]
fn test_reader_failure_is_io_error() {
    let err = parse(FailingReader).unwrap_err();
    assert!(matches!(err, KconfigError::Io(_)));
    assert!(err.to_string().contains("device went away"));
}

#[test]
fn test_grammar_error_through_reader() {
    let err = parse("config A".as_bytes()).unwrap_err();
    match err {
        KconfigError::Parse(parse_err) => assert!(parse_err.is_at_end_of_input()),
        other => panic!("expected parse error, found {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let bytes: &[u8] = &[0x63, 0x6f, 0xff, 0xfe];
    assert!(matches!(parse(bytes).unwrap_err(), KconfigError::Io(_)));
}
