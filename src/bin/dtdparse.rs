//! Command-line interface for dtdparse
//! This binary parses a DTD (following external references) and either
//! prints it in a chosen output format or re-renders it into a directory,
//! one file per parsed source.
//!
//! Usage:
//!   dtdparse parse `<path>` [--format `<format>`]      - Parse and print to stdout
//!   dtdparse render `<path>` -o `<dir>`                - Re-render the tree into a directory
//!   dtdparse list-formats                            - List available output formats

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use dtdparse::formats::{render_to_directory, FormatRegistry};
use dtdparse::pipeline::{DtdParser, ParserOptions};

fn main() {
    let matches = Command::new("dtdparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and re-serializing DTD files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v, -vv, -vvv)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a DTD and print it in the chosen format")
                .arg(
                    Arg::new("path")
                        .help("Path to the DTD file to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'dtd', 'json')")
                        .default_value("dtd"),
                )
                .arg(
                    Arg::new("ignore-external")
                        .long("ignore-external")
                        .action(ArgAction::SetTrue)
                        .help("Skip missing external DTDs instead of failing"),
                )
                .arg(
                    Arg::new("no-comments")
                        .long("no-comments")
                        .action(ArgAction::SetTrue)
                        .help("Do not collect comment declarations"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Re-render a DTD tree into a directory, one file per parsed source")
                .arg(
                    Arg::new("path")
                        .help("Path to the DTD file to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output directory")
                        .required(true),
                )
                .arg(
                    Arg::new("ignore-external")
                        .long("ignore-external")
                        .action(ArgAction::SetTrue)
                        .help("Skip missing external DTDs instead of failing"),
                )
                .arg(
                    Arg::new("no-comments")
                        .long("no-comments")
                        .action(ArgAction::SetTrue)
                        .help("Do not collect comment declarations"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("parse", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_parse_command(path, format, options_from(sub));
        }
        Some(("render", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let output = sub.get_one::<String>("output").unwrap();
            handle_render_command(path, output, options_from(sub));
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Map the counted -v flag onto a default log filter; RUST_LOG still wins.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn options_from(sub: &clap::ArgMatches) -> ParserOptions {
    ParserOptions {
        include_comments: !sub.get_flag("no-comments"),
        ignore_external: sub.get_flag("ignore-external"),
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str, options: ParserOptions) {
    let parser = DtdParser::parse(path, options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&parser, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the render command
fn handle_render_command(path: &str, output: &str, options: ParserOptions) {
    let parser = DtdParser::parse(path, options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let out_dir = PathBuf::from(output);
    if let Err(e) = render_to_directory(&parser, &out_dir) {
        eprintln!("Error writing to '{}': {}", out_dir.display(), e);
        std::process::exit(1);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|f| f.description().to_string())
            .unwrap_or_default();
        println!("  {}", name);
        if !description.is_empty() {
            println!("    {}", description);
        }
    }
}
