//! Live-server adapter.
//!
//! The server is reached through [`VariableQuery`] so the loader and its
//! tests never need a real MySQL instance.

pub mod mysql;

use crate::errors::Result;
use cnfdiff_core::{log_op_end, log_op_error, log_op_start, ConfigSource, SourceKind, Value};
use std::collections::BTreeMap;
use std::time::Instant;

pub use mysql::MySqlVariableQuery;

/// One `SHOW VARIABLES` round trip.
///
/// Rows are `(Variable_name, Value)`; a `None` value is SQL `NULL`.
pub trait VariableQuery {
    fn show_variables(&mut self) -> Result<Vec<(String, Option<String>)>>;
}

/// Snapshot every variable the server reports into a `Live` source.
///
/// # Errors
///
/// - `Query`: the statement failed or a row could not be decoded
pub fn read_live(name: &str, query: &mut dyn VariableQuery) -> Result<ConfigSource> {
    let start = Instant::now();
    log_op_start!("read_live", source = name);

    match query.show_variables() {
        Ok(rows) => {
            let entries: BTreeMap<String, Value> = rows
                .into_iter()
                .map(|(key, value)| (key, Value::from(value)))
                .collect();
            log_op_end!(
                "read_live",
                duration_ms = start.elapsed().as_millis() as u64,
                source = name,
                entry_count = entries.len()
            );
            Ok(ConfigSource::new(SourceKind::Live, name, entries))
        }
        Err(err) => {
            log_op_error!(
                "read_live",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                source = name
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::query_error;

    struct Canned(Option<Vec<(String, Option<String>)>>);

    impl VariableQuery for Canned {
        fn show_variables(&mut self) -> Result<Vec<(String, Option<String>)>> {
            self.0
                .take()
                .ok_or_else(|| query_error("canned", "already consumed"))
        }
    }

    #[test]
    fn test_null_becomes_value_null() {
        let mut q = Canned(Some(vec![
            ("port".to_string(), Some("3306".to_string())),
            ("init_file".to_string(), None),
        ]));
        let src = read_live("db1", &mut q).unwrap();
        assert_eq!(src.kind(), SourceKind::Live);
        assert_eq!(src.name(), "db1");
        assert_eq!(src.get("port"), Some(&Value::from("3306")));
        assert_eq!(src.get("init_file"), Some(&Value::Null));
    }

    #[test]
    fn test_query_failure_propagates() {
        let mut q = Canned(None);
        let err = read_live("db1", &mut q).unwrap_err();
        assert_eq!(err.code(), "ERR_QUERY");
    }
}
