//! Normalize command
//!
//! Usage: cnfdiff normalize <VALUE>...

use clap::Args;
use cnfdiff_core::{normalize, Value};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Raw values, as they would appear in an option file
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Print the canonical normalized form of each value, one per line
pub fn execute(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    for raw in args.values {
        println!("{}", normalize(Value::from(raw)).canonical());
    }
    Ok(())
}
