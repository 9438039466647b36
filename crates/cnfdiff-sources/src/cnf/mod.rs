//! MySQL option-file adapter.

pub mod parser;

use crate::errors::Result;
use cnfdiff_core::{log_op_end, log_op_error, log_op_start, ConfigSource, SourceKind};
use std::path::Path;
use std::time::Instant;

pub use parser::{canonical_key, parse_cnf_file, parse_cnf_str};

/// Option group read when none is specified
pub const DEFAULT_GROUP: &str = "mysqld";

/// Read the `group` section of an option file into a `File` source.
///
/// The source is labelled with the path as given.
///
/// # Errors
///
/// - `NotFound` / `Io`: the file cannot be read
/// - `InvalidCnf`: a line cannot be parsed
pub fn read_cnf(path: &Path, group: &str) -> Result<ConfigSource> {
    let start = Instant::now();
    let label = path.display().to_string();
    log_op_start!("read_cnf", source = %label, group = group);

    match parse_cnf_file(path, group) {
        Ok(entries) => {
            log_op_end!(
                "read_cnf",
                duration_ms = start.elapsed().as_millis() as u64,
                source = %label,
                entry_count = entries.len()
            );
            Ok(ConfigSource::new(SourceKind::File, label, entries))
        }
        Err(err) => {
            log_op_error!(
                "read_cnf",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source = %label
            );
            Err(err)
        }
    }
}
