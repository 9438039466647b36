//! cnfdiff CLI
//!
//! Compares MySQL option files and live servers and reports configuration drift

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use cnfdiff_core::logging_facility::{self, Profile};
use cnfdiff_core_types::RunId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cnfdiff")]
#[command(about = "cnfdiff - MySQL configuration drift detector", long_about = None)]
struct Cli {
    /// Log line format on stderr
    #[arg(
        long,
        global = true,
        env = "CNFDIFF_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare option files and live servers
    Compare(commands::compare::CompareArgs),
    /// Print the normalized form of values
    Normalize(commands::normalize::NormalizeArgs),
}

fn main() {
    // A missing .env is not an error
    dotenvy::dotenv().ok();

    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    logging_facility::init(cli.log_format.into());

    let run_id = RunId::new();
    let span = tracing::info_span!("run", run_id = %run_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args, subcommand_matches(&matches)),
        Commands::Normalize(args) => commands::normalize::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn subcommand_matches(matches: &ArgMatches) -> Option<&ArgMatches> {
    matches.subcommand().map(|(_, sub)| sub)
}
