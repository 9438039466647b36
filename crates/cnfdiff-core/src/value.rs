//! The opaque scalar carried by every configuration entry.
//!
//! Option files yield strings (and `Bool(true)` for bare flags), live servers
//! yield strings or SQL `NULL`, and normalization may turn either into `Int`.
//! Raw variants are never compared directly across sources: equality is
//! decided on the canonical string produced by `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration value of heterogeneous origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    Null,
}

impl Value {
    /// Canonical string used for cross-source equality
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            // MySQL reports boolean variables as ON/OFF
            Value::Bool(true) => f.write_str("ON"),
            Value::Bool(false) => f.write_str("OFF"),
            Value::Null => f.write_str("NULL"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Option<String>> for Value {
    fn from(v: Option<String>) -> Self {
        v.map(Value::Str).unwrap_or(Value::Null)
    }
}
