//! Order-insensitive comparison of comma-separated value lists.

use crate::value::Value;

/// Sort the comma-separated tokens of a string value.
///
/// Tokens are trimmed but empty tokens are kept, so the output always still
/// contains a comma and a second pass is a no-op.
pub fn normalize_set(value: Value) -> Value {
    match value {
        Value::Str(s) if s.contains(',') => {
            let mut tokens: Vec<&str> = s.split(',').map(str::trim).collect();
            tokens.sort_unstable();
            Value::Str(tokens.join(","))
        }
        other => other,
    }
}
