//! Processor API: every advertised format renders a real extract.

use kconfig_extract::kconfig::processor::{
    available_formats, process_file, process_source, ProcessingError, ProcessingSpec,
    RenderOptions,
};
use std::io::Write;

const SAMPLE: &str = r#"
menu "Compression" {
    choice boolean {
        prompt "Kernel compression mode"
        default [KERNEL_GZIP]
        config KERNEL_GZIP boolean { prompt "Gzip" }
        config KERNEL_XZ boolean { prompt "XZ" depends on [HAVE_KERNEL_XZ] }
    }
}
config LOG_BUF_SHIFT integer { prompt "Log buffer size" range [12 25] default [17] }
"#;

fn render(format: &str) -> String {
    let spec = ProcessingSpec::from_string(format).expect("known format");
    process_source(SAMPLE, &spec, &RenderOptions::default()).expect("sample to render")
}

#[test]
fn test_every_format_renders() {
    for format in available_formats() {
        let output = render(&format);
        assert!(!output.is_empty(), "format {} produced no output", format);
    }
}

#[test]
fn test_treeviz_output() {
    insta::assert_snapshot!(render("ast-treeviz"), @r###"
    RootMenu: Linux Kernel Configuration
    ├─ Menu: Compression
    │ └─ Choice: Kernel compression mode
    │   ├─ Config: KERNEL_GZIP boolean 'Gzip'
    │   └─ Config: KERNEL_XZ boolean 'XZ'
    └─ Config: LOG_BUF_SHIFT integer 'Log buffer size'
    "###);
}

#[test]
fn test_kconfig_output_is_canonical() {
    insta::assert_snapshot!(render("ast-kconfig"), @r###"
    menu "Compression" {
      choice boolean {
        prompt "Kernel compression mode"
        default [KERNEL_GZIP]
        config KERNEL_GZIP boolean {
          prompt "Gzip"
        }
        config KERNEL_XZ boolean {
          prompt "XZ"
          depends on [HAVE_KERNEL_XZ]
        }
      }
    }
    config LOG_BUF_SHIFT integer {
      prompt "Log buffer size"
      default [17]
      range [12 25]
    }
    "###);
}

#[test]
fn test_json_output_structure() {
    let json: serde_json::Value = serde_json::from_str(&render("ast-json")).unwrap();
    assert_eq!(json["prompt"]["text"], "Linux Kernel Configuration");
    assert_eq!(json["children"][0]["symbol"], "Menu");
    let choice = &json["children"][0]["children"][0];
    assert_eq!(choice["symbol"], "Choice");
    assert_eq!(choice["is_boolean"], true);
    assert_eq!(choice["options"][1]["id"], "KERNEL_XZ");
    assert_eq!(json["children"][1]["ranges"][0]["low"]["value"], "12");
}

#[test]
fn test_token_json_output() {
    let tokens: serde_json::Value = serde_json::from_str(&render("token-json")).unwrap();
    let tokens = tokens.as_array().expect("token array");
    assert_eq!(tokens[0], "Menu");
    assert_eq!(tokens[1]["StrLit"], "Compression");
}

#[test]
fn test_tag_output() {
    let output = render("ast-tag");
    assert!(output.starts_with("<root-menu>Linux Kernel Configuration<children>"));
    assert!(output.contains("<choice type=\"boolean\" mandatory=\"true\">Kernel compression mode"));
    assert!(output.contains("<range>12 25</range>"));
}

#[test]
fn test_process_file_reports_io_errors() {
    let spec = ProcessingSpec::from_string("ast-tag").unwrap();
    let result = process_file("/nonexistent/sample.extract", &spec, &RenderOptions::default());
    assert!(matches!(result, Err(ProcessingError::IoError(_))));
}

#[test]
fn test_process_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE.as_bytes()).expect("write sample");
    let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
    let output = process_file(file.path(), &spec, &RenderOptions::default()).unwrap();
    assert_eq!(output, render("ast-treeviz"));
}
