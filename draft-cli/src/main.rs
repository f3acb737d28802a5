//! Command-line interface for draft
//! This binary converts editor snapshots (JSON) into HTML and the other registered formats.
//!
//! Usage:
//!   draft `<path>` [--to `<format>`] [--config `<file>`] [--escape-text]  - Convert a snapshot
//!   draft - [--to `<format>`]                                            - Read the snapshot from stdin
//!   draft --list-formats                                                 - List available output formats
//!
//! Logging goes to stderr and is controlled by `DRAFT_LOG` (e.g. `DRAFT_LOG=debug`), so stdout
//! only ever carries the converted document.

use clap::{Arg, ArgAction, ArgMatches, Command};
use draft_babel::FormatRegistry;
use draft_config::{DraftConfig, Loader};
use std::io::Read;
use tracing_subscriber::EnvFilter;

const INPUT_FORMAT: &str = "json";

fn main() {
    init_tracing();

    let matches = Command::new("draft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts rich-text editor snapshots to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the snapshot JSON file, or '-' for stdin")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Output format (see --list-formats)")
                .default_value("html"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in configuration"),
        )
        .arg(
            Arg::new("escape-text")
                .long("escape-text")
                .help("Escape &, < and > in text content")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let to = matches
        .get_one::<String>("to")
        .expect("to has a default value");
    let config = load_config(&matches);
    handle_convert_command(path, to, &config);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer the user's file and flags over the built-in configuration
fn load_config(matches: &ArgMatches) -> DraftConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("escape-text") {
        loader = loader
            .set_override("render.escape_text", true)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the convert command
fn handle_convert_command(path: &str, to: &str, config: &DraftConfig) {
    let tags = config.tag_registry().unwrap_or_else(|e| {
        eprintln!("Invalid tag registry: {}", e);
        std::process::exit(1);
    });
    let registry = FormatRegistry::with_tags(tags, config.render_options());

    if !registry.has(to) {
        eprintln!("Unknown output format '{}'", to);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(1);
    }

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    tracing::debug!(path, bytes = source.len(), to, "converting snapshot");

    let output = registry
        .convert(&source, INPUT_FORMAT, to)
        .unwrap_or_else(|e| {
            eprintln!("Conversion error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for format in registry.formats() {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
