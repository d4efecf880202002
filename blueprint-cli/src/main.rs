//! Command-line interface for blueprint
//! This binary parses blueprint definition files, reports every diagnostic on
//! stderr and renders the resulting AST on stdout.
//!
//! Usage:
//!   bp `<path>` [--format `<format>`] [--config `<file>`]   - Parse and render a file
//!   bp `<path>` --check                                     - Only report diagnostics

use clap::{Arg, ArgAction, Command};

use blueprint_config::{BlueprintConfig, Loader};
use blueprint_parser::blueprint::formats;
use blueprint_parser::blueprint::parsing::Analyzer;

fn main() {
    let matches = Command::new("bp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and inspecting blueprint definition files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the blueprint file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'tree', 'json' or 'yaml'")
                .default_value("tree"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only report diagnostics, do not render the tree")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");
    let check_only = matches.get_flag("check");

    let config = load_config(matches.get_one::<String>("config"));

    let mut analyzer = Analyzer::new();
    let clean = analyzer.parse_file(path);

    for diagnostic in analyzer.errors() {
        if config.diagnostics.show_kind {
            eprintln!("{} [{}]", diagnostic, diagnostic.kind);
        } else {
            eprintln!("{}", diagnostic);
        }
    }

    if !check_only {
        let rendered = match format.as_str() {
            "tree" => formats::to_tree_string(analyzer.ast(), config.inspect.ast.show_line_numbers),
            "json" => formats::to_json_string(analyzer.ast(), config.inspect.ast.include_metadata)
                .unwrap_or_else(|err| {
                    eprintln!("Error rendering JSON: {}", err);
                    std::process::exit(1);
                }),
            "yaml" => formats::to_yaml_string(analyzer.ast(), config.inspect.ast.include_metadata)
                .unwrap_or_else(|err| {
                    eprintln!("Error rendering YAML: {}", err);
                    std::process::exit(1);
                }),
            other => {
                eprintln!("Format '{}' not supported", other);
                eprintln!("Available formats: tree, json, yaml");
                std::process::exit(1);
            }
        };
        print!("{}", rendered);
    }

    if !clean {
        std::process::exit(1);
    }
}

/// Load the toolchain configuration, layering an explicit file when given.
fn load_config(explicit: Option<&String>) -> BlueprintConfig {
    let loader = match explicit {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|err| {
        eprintln!("Configuration error: {}", err);
        std::process::exit(1);
    })
}
