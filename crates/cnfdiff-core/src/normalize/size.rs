//! Magnitude suffixes (`K`, `M`, `G`, ...) to byte counts.

use crate::value::Value;

fn multiplier(suffix: char) -> Option<i64> {
    let exp = match suffix.to_ascii_uppercase() {
        'K' => 1,
        'M' => 2,
        'G' => 3,
        'T' => 4,
        'P' => 5,
        'E' => 6,
        _ => return None,
    };
    Some(1_i64 << (10 * exp))
}

/// `"<digits><suffix>"` becomes `Int(digits * 1024^n)`.
///
/// Anything else, including values that would overflow `i64`, is returned
/// unchanged.
pub fn normalize_size(value: Value) -> Value {
    let Value::Str(ref s) = value else {
        return value;
    };
    let trimmed = s.trim();
    let Some(suffix) = trimmed.chars().last() else {
        return value;
    };
    let Some(mult) = multiplier(suffix) else {
        return value;
    };
    let digits = &trimmed[..trimmed.len() - suffix.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return value;
    }
    match digits
        .parse::<i64>()
        .ok()
        .and_then(|n| n.checked_mul(mult))
    {
        Some(bytes) => Value::Int(bytes),
        None => value,
    }
}
