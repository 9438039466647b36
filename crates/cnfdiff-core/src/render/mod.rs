//! Output rendering for a [`ConfigDiff`].

pub mod json;
pub mod plain;

use crate::diff::ConfigDiff;
use crate::errors::{CnfDiffError, Result};
use std::str::FromStr;

pub use json::render_json;
pub use plain::render_plain;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    PrettyJson,
}

impl FromStr for OutputFormat {
    type Err = CnfDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "prettyJson" | "pretty-json" => Ok(OutputFormat::PrettyJson),
            other => Err(CnfDiffError::UnknownOutputFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// Render `diff` in the requested format.
///
/// # Errors
///
/// - `Serialization`: JSON encoding failed
pub fn render(diff: &ConfigDiff, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(diff)),
        OutputFormat::Json => render_json(diff, false),
        OutputFormat::PrettyJson => render_json(diff, true),
    }
}
