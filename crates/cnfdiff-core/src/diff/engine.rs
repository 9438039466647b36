//! Diff computation.
//!
//! The core entry point is [`compare`], which takes already-loaded sources
//! in baseline-first order and produces a [`ConfigDiff`].

use crate::diff::model::{ConfigDiff, Slot};
use crate::normalize::normalized;
use crate::source::{ConfigSource, SourceKind};
use crate::{log_op_end, log_op_start};
use std::time::Instant;

/// Whether `owner`, the side that has the key, is excused for the other
/// side lacking it.
///
/// A live server enumerates every variable it knows while a file only sets a
/// handful, so a key held by a live source and absent from a source of the
/// other kind is expected. Same-kind pairs are never excused.
fn absence_excused(owner: SourceKind, other: SourceKind) -> bool {
    owner == SourceKind::Live && owner != other
}

/// Build the full row for `key`: one normalized slot per source.
fn seed_row(sources: &[ConfigSource], key: &str) -> Vec<Slot> {
    sources
        .iter()
        .map(|s| s.get(key).map(normalized).into())
        .collect()
}

/// Compare `sources[1..]` against the baseline `sources[0]`.
///
/// For each non-baseline source the engine runs two passes:
///
/// - **forward**: every baseline key is looked up in the other source. A
///   missing key is recorded unless the baseline is live and the other side
///   is a file. A present key is recorded when the normalized values differ.
/// - **reverse**: every key of the other source that the baseline lacks is
///   recorded unless the other source is live and the baseline is a file.
///
/// Fewer than two sources is a degenerate input and yields an empty diff.
pub fn compare(sources: &[ConfigSource]) -> ConfigDiff {
    let columns = sources.iter().map(|s| s.name().to_string()).collect();
    let mut diff = ConfigDiff::new(columns);

    if sources.len() < 2 {
        return diff;
    }

    let start = Instant::now();
    log_op_start!("compare", source_count = sources.len());

    let baseline = &sources[0];
    for other in &sources[1..] {
        // Forward pass
        for (key, base_value) in baseline.entries() {
            match other.get(key) {
                None => {
                    if !absence_excused(baseline.kind(), other.kind()) {
                        diff.record_with(key, || seed_row(sources, key));
                    }
                }
                Some(other_value) => {
                    let a = normalized(base_value);
                    let b = normalized(other_value);
                    if a.canonical() != b.canonical() {
                        tracing::debug!(key = %key, baseline = %a, other = %b, "value mismatch");
                        diff.record_with(key, || seed_row(sources, key));
                    }
                }
            }
        }

        // Reverse pass
        for key in other.entries().keys() {
            if !baseline.contains(key) && !absence_excused(other.kind(), baseline.kind()) {
                diff.record_with(key, || seed_row(sources, key));
            }
        }
    }

    log_op_end!(
        "compare",
        duration_ms = start.elapsed().as_millis() as u64,
        diff_count = diff.len()
    );
    diff
}
