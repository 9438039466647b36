//! Diff output types.

use crate::value::Value;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Rendered in place of a value for a source that lacks the key.
pub const MISSING: &str = "<Missing>";

/// One source's contribution to a diff row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Value(Value),
    Missing,
}

impl From<Option<Value>> for Slot {
    fn from(v: Option<Value>) -> Self {
        v.map(Slot::Value).unwrap_or(Slot::Missing)
    }
}

impl From<Value> for Slot {
    fn from(v: Value) -> Self {
        Slot::Value(v)
    }
}

impl From<&str> for Slot {
    fn from(v: &str) -> Self {
        Slot::Value(v.into())
    }
}

impl From<i64> for Slot {
    fn from(v: i64) -> Self {
        Slot::Value(Value::Int(v))
    }
}

impl From<bool> for Slot {
    fn from(v: bool) -> Self {
        Slot::Value(Value::Bool(v))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Value(v) => v.fmt(f),
            Slot::Missing => f.write_str(MISSING),
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Value(v) => v.serialize(serializer),
            Slot::Missing => serializer.serialize_str(MISSING),
        }
    }
}

/// Keys that differ across sources, with one slot per source.
///
/// `columns` holds the source labels in the same order as each row's slots.
/// Slot 0 always belongs to the baseline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDiff {
    columns: Vec<String>,
    rows: BTreeMap<String, Vec<Slot>>,
}

impl ConfigDiff {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: BTreeMap::new(),
        }
    }

    /// Seed a row the first time `key` is recorded. Later calls for the same
    /// key leave the existing row untouched.
    pub(crate) fn record_with(&mut self, key: &str, seed: impl FnOnce() -> Vec<Slot>) {
        if !self.rows.contains_key(key) {
            self.rows.insert(key.to_string(), seed());
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn get(&self, key: &str) -> Option<&[Slot]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Slot])> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The key → slots map, for serialization.
    pub fn rows(&self) -> &BTreeMap<String, Vec<Slot>> {
        &self.rows
    }
}
