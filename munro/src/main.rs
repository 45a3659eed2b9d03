//! # munro
//!
//! A command-line lookup over the Munro tables.
//!
//! ## Overview
//!
//! munro is built on top of munrolib. It loads the tables from CSV, turns its
//! flags into a query, and prints the matching hills as JSON (default) or as
//! a table rendered through outstanding.
//!
//! ## Usage
//!
//! ```bash
//! # Every entry, in table order
//! munro --data munrotab_v6.2.csv
//!
//! # Munros between 900m and 1000m, highest first
//! munro --min-height 900 --max-height 1000 --category MUN --sort height:desc
//!
//! # The ten highest tops, as a table
//! munro -c TOP -s height:desc -n 10 -o table
//!
//! # Sort by height, then name for ties
//! munro --sort height:desc,name
//! ```
//!
//! The dataset path can also come from the `MUNRO_DATA` environment variable.
//! Logging goes to stderr and follows `RUST_LOG`, or `-v`/`-vv`.

mod render;

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use munrolib::{Category, MunroFinder, Query, SortKey};
use render::OutputMode;
use tracing_subscriber::EnvFilter;

const DEFAULT_DATA: &str = "munrotab_v6.2.csv";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("munro")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Search the Munro tables by height and category")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .env("MUNRO_DATA")
                .default_value(DEFAULT_DATA)
                .help("Path to the Munro tables CSV"),
        )
        .arg(
            Arg::new("min-height")
                .long("min-height")
                .value_parser(value_parser!(f64))
                .help("Only include hills at least this high (metres)"),
        )
        .arg(
            Arg::new("max-height")
                .long("max-height")
                .value_parser(value_parser!(f64))
                .help("Only include hills at most this high (metres)"),
        )
        .arg(
            Arg::new("category")
                .short('c')
                .long("category")
                .value_parser(Category::from_str)
                .help("Only include this category (MUN or TOP)"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .value_parser(SortKey::from_str)
                .help("Sort by field[:asc|desc], fields: height, name (repeat for tie-breakers)"),
        )
        .arg(
            Arg::new("limit")
                .short('n')
                .long("limit")
                .value_parser(value_parser!(usize))
                .help("Return at most this many hills (0 for no limit)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("json")
                .value_parser(parse_output_mode)
                .help("Output mode: json, table, term, text or term-debug"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more (-v info, -vv debug)"),
        )
}

/// Map an --output value onto an outstanding output mode
///
/// `table` leaves color detection to outstanding.
fn parse_output_mode(s: &str) -> Result<OutputMode, String> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputMode::Json),
        "table" | "auto" => Ok(OutputMode::Auto),
        "term" => Ok(OutputMode::Term),
        "text" => Ok(OutputMode::Text),
        "term-debug" => Ok(OutputMode::TermDebug),
        _ => Err(format!(
            "unknown output mode '{s}' (expected json, table, term, text or term-debug)"
        )),
    }
}

/// Build a query from matches
fn build_query(matches: &ArgMatches) -> Result<Query, anyhow::Error> {
    let mut builder = Query::builder();

    if let Some(&min) = matches.get_one::<f64>("min-height") {
        builder = builder.with_min_height(min)?;
    }
    if let Some(&max) = matches.get_one::<f64>("max-height") {
        builder = builder.with_max_height(max)?;
    }
    if let Some(&category) = matches.get_one::<Category>("category") {
        builder = builder.with_category(category);
    }
    if let Some(keys) = matches.get_many::<SortKey>("sort") {
        for &key in keys {
            builder = builder.sort_by(key);
        }
    }
    if let Some(&limit) = matches.get_one::<usize>("limit") {
        builder = builder.limit(limit);
    }

    Ok(builder.build())
}

/// Install the stderr log subscriber
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    // Query errors are reported before the dataset is read
    let query = build_query(matches)?;

    let data = matches
        .get_one::<String>("data")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_DATA);
    let finder = MunroFinder::from_path(data)
        .with_context(|| format!("could not load the Munro tables from '{data}'"))?;

    let results = finder.find(&query);
    tracing::info!(
        records = finder.len(),
        results = results.len(),
        "search complete"
    );

    let output_mode = matches
        .get_one::<OutputMode>("output")
        .copied()
        .unwrap_or(OutputMode::Json);
    render::render_results(&results, output_mode)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
