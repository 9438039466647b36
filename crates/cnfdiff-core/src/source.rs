//! Uniform read-only view over one origin's settings.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where a [`ConfigSource`] came from.
///
/// The diff engine's asymmetry rule is a property of the pair of kinds being
/// compared, so this is a closed enum rather than a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A static option file
    File,
    /// The variables reported by a running server
    Live,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::File => f.write_str("file"),
            SourceKind::Live => f.write_str("live"),
        }
    }
}

/// A named, fully materialized bag of key/value settings.
///
/// Built once by an adapter and never mutated afterwards. Keys are
/// case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    kind: SourceKind,
    name: String,
    entries: BTreeMap<String, Value>,
}

impl ConfigSource {
    pub fn new(
        kind: SourceKind,
        name: impl Into<String>,
        entries: BTreeMap<String, Value>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            entries,
        }
    }

    /// Shorthand for `new(SourceKind::File, ..)` built from pairs.
    pub fn file<K, V>(name: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::new(SourceKind::File, name, collect_entries(entries))
    }

    /// Shorthand for `new(SourceKind::Live, ..)` built from pairs.
    pub fn live<K, V>(name: impl Into<String>, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::new(SourceKind::Live, name, collect_entries(entries))
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Display label (file path or redacted DSN); not used for comparison.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &BTreeMap<String, Value> {
        &self.entries
    }

    /// `None` means the key is absent, which is not an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn collect_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> BTreeMap<String, Value>
where
    K: Into<String>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
