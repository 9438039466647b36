//! Compare command
//!
//! Usage: cnfdiff compare [-c <FILE>]... [-d <DSN>]... [-o <FORMAT>]

use clap::{ArgMatches, Args};
use cnfdiff_core::errors::{ExError, ExErrorKind};
use cnfdiff_core::{compare, render, OutputFormat};
use cnfdiff_sources::cnf::DEFAULT_GROUP;
use cnfdiff_sources::{load_sources, Dsn, LoadOptions, MySqlConnector, SourceSpec};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// MySQL option file (repeatable)
    #[arg(short, long, value_name = "FILE")]
    pub cnf: Vec<PathBuf>,

    /// Live server DSN, driver or legacy h=,P=,u= form (repeatable)
    #[arg(short, long, value_name = "DSN", value_parser = parse_dsn)]
    pub dsn: Vec<Dsn>,

    /// Output format: plain, json or prettyJson
    #[arg(short, long, env = "CNFDIFF_OUTPUT", default_value = "plain")]
    pub output: String,

    /// Option-file group to read
    #[arg(long, env = "CNFDIFF_GROUP", default_value = DEFAULT_GROUP)]
    pub group: String,

    /// Seconds to wait for each live server
    #[arg(long, env = "CNFDIFF_CONNECT_TIMEOUT", value_name = "SECS", default_value_t = 10)]
    pub connect_timeout: u64,
}

fn parse_dsn(value: &str) -> Result<Dsn, String> {
    Dsn::parse(value).map_err(|e| e.to_string())
}

/// Execute compare command
///
/// `matches` are this subcommand's matches; they recover the command-line
/// order of `--cnf` and `--dsn`, which decides the baseline.
pub fn execute(
    args: CompareArgs,
    matches: Option<&ArgMatches>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Reject a bad format before touching any server
    let format: OutputFormat = args.output.parse().map_err(ExError::from)?;

    let options = LoadOptions {
        group: args.group.clone(),
        connect_timeout: Duration::from_secs(args.connect_timeout),
    };
    let specs = specs_in_command_line_order(args, matches);
    if specs.is_empty() {
        return Err(Box::new(
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("compare")
                .with_message("at least one --cnf or --dsn is required"),
        ));
    }

    let sources = load_sources(&specs, &options, &MySqlConnector)?;
    let diff = compare(&sources);
    let output = render(&diff, format).map_err(ExError::from)?;

    print!("{}", output);
    Ok(())
}

/// Interleave files and DSNs by their position on the command line.
///
/// Without matches, files come before DSNs.
fn specs_in_command_line_order(args: CompareArgs, matches: Option<&ArgMatches>) -> Vec<SourceSpec> {
    let files = args.cnf.into_iter().map(SourceSpec::File);
    let servers = args.dsn.into_iter().map(SourceSpec::Live);

    let Some(matches) = matches else {
        return files.chain(servers).collect();
    };

    let mut indexed: Vec<(usize, SourceSpec)> = Vec::new();
    if let Some(indices) = matches.indices_of("cnf") {
        indexed.extend(indices.zip(files));
    }
    if let Some(indices) = matches.indices_of("dsn") {
        indexed.extend(indices.zip(servers));
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, spec)| spec).collect()
}
