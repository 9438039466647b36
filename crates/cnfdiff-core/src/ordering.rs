//! Baseline selection.
//!
//! The asymmetry rule makes the choice of baseline kind observable, so it is
//! taken from operator intent: whichever kind of input was given first.

use crate::source::{ConfigSource, SourceKind};

/// Kind of the first operator-specified input; `File` when there is none.
pub fn baseline_kind<I>(kinds_in_input_order: I) -> SourceKind
where
    I: IntoIterator<Item = SourceKind>,
{
    kinds_in_input_order
        .into_iter()
        .next()
        .unwrap_or(SourceKind::File)
}

/// Put all sources of kind `baseline` first.
///
/// This is a stable partition: within each kind, sources keep their input
/// order.
pub fn order_sources(sources: Vec<ConfigSource>, baseline: SourceKind) -> Vec<ConfigSource> {
    let (mut ordered, rest): (Vec<_>, Vec<_>) =
        sources.into_iter().partition(|s| s.kind() == baseline);
    ordered.extend(rest);
    ordered
}
