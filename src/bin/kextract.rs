//! Command-line interface for kextract
//! This binary parses Kconfig extract files and prints them in different formats.
//!
//! Usage:
//!   kextract parse `<path>` [--format `<format>`] [--config `<file>`] [-v]  - Parse and print a file
//!   kextract list-formats                                                - List all available formats
#[path = "kextract/verbose.rs"]
mod verbose;

use clap::{Arg, ArgAction, ArgMatches, Command};
use kconfig_extract::kconfig::config::{KextractConfig, Loader};
use kconfig_extract::kconfig::parser::parse_file;
use kconfig_extract::kconfig::processor::{
    available_formats, process_file, render_ast, ProcessingSpec, ProcessingStage, RenderOptions,
};
use verbose::{vprintln, Timer};

fn main() {
    let matches = Command::new("kextract")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Kconfig extract files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print it in the chosen format")
                .arg(
                    Arg::new("path")
                        .help("Path to the extract file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-treeviz', 'token-simple')"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("Configuration file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Print diagnostics to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn load_config(matches: &ArgMatches) -> Result<KextractConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    loader.build()
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) {
    verbose::init(matches.get_flag("verbose"));

    let config = load_config(matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let spec = ProcessingSpec::from_string(&config.output.format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Run 'kextract list-formats' to see the available formats.");
        std::process::exit(1);
    });

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    vprintln!("input: {}", path);
    vprintln!("output format: {}", spec);

    let output = {
        let _t = Timer::start("processing");
        render(path, &spec, &config.render_options())
    }
    .unwrap_or_else(|e| {
        eprintln!("{}: {}", path, e);
        std::process::exit(1);
    });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Token stages go straight through the processor; AST stages parse once so
/// the tree can be reported on before it is rendered
fn render(
    path: &str,
    spec: &ProcessingSpec,
    options: &RenderOptions,
) -> Result<String, Box<dyn std::error::Error>> {
    match spec.stage {
        ProcessingStage::Token => Ok(process_file(path, spec, options)?),
        ProcessingStage::Ast => {
            let root = parse_file(path)?;
            vprintln!(
                "symbols: {} top-level, {} total",
                root.children.len(),
                root.node_count()
            );
            Ok(render_ast(&root, spec.format, options)?)
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
