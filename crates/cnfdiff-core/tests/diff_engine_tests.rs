//! Diff engine scenarios.
//!
//! All tests operate on in-memory sources (no I/O).

use cnfdiff_core::diff::{compare, Slot};
use cnfdiff_core::{order_sources, ConfigSource, SourceKind, Value};
use std::collections::BTreeMap;

fn empty_source(kind: SourceKind, name: &str) -> ConfigSource {
    ConfigSource::new(kind, name, BTreeMap::new())
}

// ---------------------------------------------------------------------------
// Equal and degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn test_identical_file_sources_produce_empty_diff() {
    let a = ConfigSource::file("a.cnf", [("port", "3306"), ("sql_mode", "A,B")]);
    let b = ConfigSource::file("b.cnf", [("port", "3306"), ("sql_mode", "A,B")]);
    assert!(compare(&[a, b]).is_empty());
}

#[test]
fn test_identical_live_sources_produce_empty_diff() {
    let a = ConfigSource::live("db1", [("port", "3306")]);
    let b = ConfigSource::live("db2", [("port", "3306")]);
    assert!(compare(&[a, b]).is_empty());
}

#[test]
fn test_fewer_than_two_sources() {
    assert!(compare(&[]).is_empty());
    let only = ConfigSource::live("db1", [("port", "3306")]);
    assert!(compare(&[only]).is_empty());
}

// ---------------------------------------------------------------------------
// Missing keys
// ---------------------------------------------------------------------------

#[test]
fn test_bidirectional_missing_keys_between_files() {
    let base = ConfigSource::file("base.cnf", [("a", Value::Int(1)), ("b", Value::Int(2))]);
    let other = ConfigSource::file("other.cnf", [("a", Value::Int(1)), ("c", Value::Int(3))]);

    let diff = compare(&[base, other]);

    assert_eq!(diff.len(), 2);
    assert_eq!(diff.get("b"), Some(&[Slot::from(2_i64), Slot::Missing][..]));
    assert_eq!(diff.get("c"), Some(&[Slot::Missing, Slot::from(3_i64)][..]));
    assert!(!diff.contains_key("a"));
}

#[test]
fn test_live_baseline_key_absent_from_file_is_excused() {
    let live = ConfigSource::live("db1", [("port", "3306"), ("wait_timeout", "28800")]);
    let file = ConfigSource::file("my.cnf", [("port", "3306")]);

    let diff = compare(&[live, file]);

    assert!(!diff.contains_key("wait_timeout"));
    assert!(diff.is_empty());
}

#[test]
fn test_file_baseline_key_absent_from_live_is_reported() {
    let file = ConfigSource::file("my.cnf", [("port", "3306"), ("no_such_var", "1")]);
    let live = ConfigSource::live("db1", [("port", "3306")]);

    let diff = compare(&[file, live]);

    assert_eq!(
        diff.get("no_such_var"),
        Some(&[Slot::from(1_i64), Slot::Missing][..])
    );
}

#[test]
fn test_file_only_key_reported_in_reverse_pass_with_live_baseline() {
    let live = ConfigSource::live("db1", [("port", "3306")]);
    let file = ConfigSource::file("my.cnf", [("port", "3306"), ("typo_var", "on")]);

    let diff = compare(&[live, file]);

    assert_eq!(
        diff.get("typo_var"),
        Some(&[Slot::Missing, Slot::from("on")][..])
    );
}

#[test]
fn test_same_kind_live_sources_report_absence_both_ways() {
    let a = ConfigSource::live("db1", [("port", "3306"), ("only_a", "x")]);
    let b = ConfigSource::live("db2", [("port", "3306"), ("only_b", "y")]);

    let diff = compare(&[a, b]);

    assert!(diff.contains_key("only_a"));
    assert!(diff.contains_key("only_b"));
}

// ---------------------------------------------------------------------------
// Normalized comparison
// ---------------------------------------------------------------------------

#[test]
fn test_type_differing_representations_compare_equal() {
    let file = ConfigSource::file(
        "my.cnf",
        [("port", Value::Int(3306)), ("max_connections", "100".into())],
    );
    let live = ConfigSource::live(
        "db1",
        [
            ("port", Value::from("3306")),
            ("max_connections", Value::Int(100)),
            ("wait_timeout", Value::Int(28800)),
        ],
    );

    assert!(compare(&[file, live]).is_empty());
}

#[test]
fn test_size_and_set_normalization_apply_during_compare() {
    let file = ConfigSource::file(
        "my.cnf",
        [("max_allowed_packet", "64M"), ("sql_mode", "STRICT_TRANS_TABLES,ANSI_QUOTES")],
    );
    let live = ConfigSource::live(
        "db1",
        [("max_allowed_packet", "67108864"), ("sql_mode", "ANSI_QUOTES,STRICT_TRANS_TABLES")],
    );

    assert!(compare(&[file, live]).is_empty());
}

#[test]
fn test_mismatch_records_normalized_values() {
    let file = ConfigSource::file("my.cnf", [("innodb_buffer_pool_size", "1G")]);
    let live = ConfigSource::live("db1", [("innodb_buffer_pool_size", "134217728")]);

    let diff = compare(&[file, live]);

    assert_eq!(
        diff.get("innodb_buffer_pool_size"),
        Some(&[Slot::from(1_073_741_824_i64), Slot::from(134_217_728_i64)][..])
    );
}

#[test]
fn test_bare_flag_matches_live_on() {
    let file = ConfigSource::file("my.cnf", [("skip_name_resolve", Value::Bool(true))]);
    let live = ConfigSource::live("db1", [("skip_name_resolve", "ON")]);
    assert!(compare(&[file, live]).is_empty());
}

// ---------------------------------------------------------------------------
// Multiple comparison rounds
// ---------------------------------------------------------------------------

#[test]
fn test_rows_have_one_slot_per_source() {
    let base = ConfigSource::file("base.cnf", [("a", "1")]);
    let same = ConfigSource::file("same.cnf", [("a", "1")]);
    let changed = ConfigSource::file("changed.cnf", [("a", "2")]);

    let diff = compare(&[base, same, changed]);

    assert_eq!(diff.columns(), ["base.cnf", "same.cnf", "changed.cnf"]);
    assert_eq!(
        diff.get("a"),
        Some(&[Slot::from(1_i64), Slot::from(1_i64), Slot::from(2_i64)][..])
    );
}

#[test]
fn test_first_slot_is_baseline_when_key_mismatches_in_several_rounds() {
    let base = ConfigSource::file("base.cnf", [("a", "1")]);
    let two = ConfigSource::file("two.cnf", [("a", "2")]);
    let three = empty_source(SourceKind::File, "three.cnf");

    let diff = compare(&[base, two, three]);

    assert_eq!(
        diff.get("a"),
        Some(&[Slot::from(1_i64), Slot::from(2_i64), Slot::Missing][..])
    );
    assert_eq!(diff.len(), 1);
}

#[test]
fn test_excused_round_still_shows_missing_slot() {
    let base = ConfigSource::live("db1", [("x", "1")]);
    let file = empty_source(SourceKind::File, "my.cnf");
    let other = ConfigSource::live("db2", [("x", "2")]);

    let diff = compare(&[base, file, other]);

    assert_eq!(
        diff.get("x"),
        Some(&[Slot::from(1_i64), Slot::Missing, Slot::from(2_i64)][..])
    );
}

#[test]
fn test_keys_are_case_sensitive() {
    let a = ConfigSource::file("a.cnf", [("Port", "1")]);
    let b = ConfigSource::file("b.cnf", [("port", "1")]);

    let diff = compare(&[a, b]);

    assert!(diff.contains_key("Port"));
    assert!(diff.contains_key("port"));
}

// ---------------------------------------------------------------------------
// End-to-end with ordering
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_file_baseline_against_live() {
    let file = ConfigSource::file(
        "my.cnf",
        [("port", Value::Int(3306)), ("max_connections", Value::from("100"))],
    );
    let live = ConfigSource::live(
        "db1",
        [
            ("port", Value::from("3306")),
            ("max_connections", Value::Int(100)),
            ("wait_timeout", Value::Int(28800)),
        ],
    );

    let ordered = order_sources(vec![live, file], SourceKind::File);
    assert_eq!(ordered[0].kind(), SourceKind::File);

    assert!(compare(&ordered).is_empty());
}

#[test]
fn test_baseline_choice_changes_outcome() {
    let file = ConfigSource::file("my.cnf", [("port", "3306")]);
    let live = ConfigSource::live("db1", [("port", "3306"), ("extra", "1")]);

    // Live-only key: excused either way round, because the live side owns it
    let file_first = compare(&order_sources(vec![file.clone(), live.clone()], SourceKind::File));
    let live_first = compare(&order_sources(vec![file, live], SourceKind::Live));
    assert!(file_first.is_empty());
    assert!(live_first.is_empty());

    // File-only key: always surfaced
    let file = ConfigSource::file("my.cnf", [("port", "3306"), ("typo", "1")]);
    let live = ConfigSource::live("db1", [("port", "3306")]);
    let live_first = compare(&order_sources(vec![file, live], SourceKind::Live));
    assert_eq!(live_first.get("typo"), Some(&[Slot::Missing, Slot::from(1_i64)][..]));
}
