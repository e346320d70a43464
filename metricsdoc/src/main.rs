//! # metricsdoc
//!
//! Prints a list of all runtime metrics and their properties.
//!
//! ## Overview
//!
//! metricsdoc is built on top of metricsdoclib. It takes the runtime's
//! metric descriptors and writes them to stdout as a four-column table:
//! name, kind, whether the metric is cumulative, and its description.
//!
//! ## Usage
//!
//! ```bash
//! # Markdown table (default)
//! metricsdoc
//!
//! # CSV
//! metricsdoc --format csv
//!
//! # Descriptors from a JSON file instead of the built-in list
//! metricsdoc --descriptors metrics.json
//!
//! # Diagnostics on stderr
//! metricsdoc -vv
//! ```

use std::io;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use metricsdoclib::{catalog, render_descriptors, Format};
use tracing::level_filters::LevelFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    let formats: Vec<&str> = Format::ALL.iter().map(|f| f.name()).collect();

    Command::new("metricsdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Prints a list of all runtime metrics and their properties.")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .default_value(Format::default().name())
                .help(format!("Output format ({})", formats.join(", "))),
        )
        .arg(
            Arg::new("descriptors")
                .long("descriptors")
                .value_name("PATH")
                .help("Read descriptors from a JSON file instead of the built-in list"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log diagnostics to stderr (repeat for more detail)"),
        )
}

/// Install a stderr subscriber whose level follows the -v count
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    // The format is checked before anything else so a bad value never
    // produces partial output.
    let format: Format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or_default()
        .parse()?;

    let descriptors = match matches.get_one::<String>("descriptors") {
        Some(path) => catalog::load_json(path)?,
        None => catalog::builtin(),
    };
    tracing::info!(%format, count = descriptors.len(), "rendering metrics table");

    let stdout = io::stdout();
    render_descriptors(stdout.lock(), format, &descriptors)?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}
