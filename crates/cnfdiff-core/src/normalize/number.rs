//! Canonical decimal form for numeric-looking strings.

use crate::value::Value;

struct Decimal<'a> {
    negative: bool,
    int: &'a str,
    frac: &'a str,
}

fn parse_decimal(s: &str) -> Option<Decimal<'_>> {
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rest, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if int.len() + frac.len() == 0 || !all_digits(int) || !all_digits(frac) {
        return None;
    }
    Some(Decimal {
        negative,
        int: int.trim_start_matches('0'),
        frac: frac.trim_end_matches('0'),
    })
}

/// Strip sign noise, leading zeros and trailing fractional zeros.
///
/// Whole numbers that fit in `i64` become `Int`; larger ones and fractions
/// stay `Str` in canonical text (`"1.50"` becomes `"1.5"`).
pub fn normalize_number(value: Value) -> Value {
    let Value::Str(ref s) = value else {
        return value;
    };
    let Some(dec) = parse_decimal(s.trim()) else {
        return value;
    };

    let int = if dec.int.is_empty() { "0" } else { dec.int };
    let is_zero = int == "0" && dec.frac.is_empty();
    let sign = if dec.negative && !is_zero { "-" } else { "" };

    if dec.frac.is_empty() {
        let text = format!("{sign}{int}");
        match text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Str(text),
        }
    } else {
        Value::Str(format!("{sign}{int}.{}", dec.frac))
    }
}
