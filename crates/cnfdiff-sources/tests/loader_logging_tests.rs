//! Structured log events emitted while loading sources.
//!
//! Kept in its own test binary: the capture subscriber is process-global and
//! the assertions count `load_sources` events.

use cnfdiff_core::errors::{ExError, ExErrorKind};
use cnfdiff_core::logging_facility::test_capture::init_test_capture;
use cnfdiff_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ENTRY_COUNT, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_SOURCE, FIELD_SOURCE_COUNT, FIELD_SOURCE_KIND,
};
use cnfdiff_sources::{
    load_sources, Connector, Dsn, LoadOptions, Result, SourceSpec, VariableQuery,
};
use std::fs;
use tempfile::TempDir;

struct OneVariable;

impl VariableQuery for OneVariable {
    fn show_variables(&mut self) -> Result<Vec<(String, Option<String>)>> {
        Ok(vec![("port".to_string(), Some("3306".to_string()))])
    }
}

/// Accepts `db1` and refuses every other host.
struct OnlyDb1;

impl Connector for OnlyDb1 {
    fn connect(&self, dsn: &Dsn, _options: &LoadOptions) -> Result<Box<dyn VariableQuery>> {
        if dsn.address.to_string() == "tcp(db1:3306)" {
            Ok(Box::new(OneVariable))
        } else {
            Err(ExError::new(ExErrorKind::Connection)
                .with_op("connect")
                .with_source_name(dsn.to_string())
                .with_message("connection refused"))
        }
    }
}

fn live(dsn: &str) -> SourceSpec {
    SourceSpec::Live(Dsn::parse(dsn).unwrap())
}

#[test]
fn test_every_load_start_is_closed() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let cnf = dir.path().join("logged.cnf");
    fs::write(&cnf, "[mysqld]\nport=3306\nuser=mysql\n").unwrap();
    let label = cnf.display().to_string();

    // Live first, so the baseline kind is live
    let ok_specs = vec![live("root@tcp(db1)/"), SourceSpec::File(cnf.clone())];
    load_sources(&ok_specs, &LoadOptions::default(), &OnlyDb1).unwrap();

    let bad_specs = vec![SourceSpec::File(cnf), live("root@tcp(down)/")];
    let err = load_sources(&bad_specs, &LoadOptions::default(), &OnlyDb1).unwrap_err();
    assert_eq!(err.code(), "ERR_CONNECTION");

    let events = capture.events_for_op("load_sources");
    let count = |event: &str| {
        events
            .iter()
            .filter(|e| e.event.as_deref() == Some(event))
            .count()
    };
    assert_eq!(count(EVENT_START), 2);
    assert_eq!(count(EVENT_END), 1);
    assert_eq!(count(EVENT_END_ERROR), 1);

    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.field(FIELD_SOURCE_KIND), Some("live"));
    assert_eq!(end.field(FIELD_SOURCE_COUNT), Some("2"));
    assert!(end.field(FIELD_DURATION_MS).is_some());

    let failed = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .unwrap();
    assert_eq!(failed.field(FIELD_ERR_CODE), Some("ERR_CONNECTION"));
    assert_eq!(failed.field(FIELD_ERR_KIND), Some("Connection"));

    let cnf_ends: Vec<_> = capture
        .events_for_op("read_cnf")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(cnf_ends.len(), 2);
    for end in &cnf_ends {
        assert_eq!(end.field(FIELD_SOURCE), Some(label.as_str()));
        assert_eq!(end.field(FIELD_ENTRY_COUNT), Some("2"));
    }
}
