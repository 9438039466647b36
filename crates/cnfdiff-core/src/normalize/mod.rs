//! Value normalization pipeline.
//!
//! Maps semantically equal representations of a setting onto one form so the
//! diff engine compares meaning rather than spelling. Stages run in a fixed
//! order and each is the identity on input it does not recognise:
//!
//! 1. [`size::normalize_size`]: `16M` becomes `16777216`
//! 2. [`number::normalize_number`]: `01`, `+1` and `1.000` become `1`
//! 3. [`set::normalize_set`]: `c,a,b` becomes `a,b,c`
//!
//! The pipeline is total and idempotent.

pub mod number;
pub mod set;
pub mod size;

use crate::value::Value;

/// A single normalization stage
pub type Normalizer = fn(Value) -> Value;

/// Stages in application order
pub const PIPELINE: &[Normalizer] = &[
    size::normalize_size,
    number::normalize_number,
    set::normalize_set,
];

/// Run `value` through every stage of [`PIPELINE`].
pub fn normalize(value: Value) -> Value {
    PIPELINE.iter().fold(value, |v, stage| stage(v))
}

/// Normalize by reference, for callers that keep the raw value.
pub fn normalized(value: &Value) -> Value {
    normalize(value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_plain_bytes_agree() {
        assert_eq!(normalize("16M".into()), normalize("16777216".into()));
    }

    #[test]
    fn test_leading_zero_numbers_agree() {
        assert_eq!(normalize("01".into()), normalize("1".into()));
    }

    #[test]
    fn test_set_order_ignored() {
        assert_eq!(normalize("a,b,c".into()), normalize("c,b,a".into()));
    }

    #[test]
    fn test_unrecognised_passes_through() {
        assert_eq!(
            normalize("/var/lib/mysql".into()),
            Value::from("/var/lib/mysql")
        );
        assert_eq!(normalize(Value::Bool(true)), Value::Bool(true));
        assert_eq!(normalize(Value::Null), Value::Null);
    }

    #[test]
    fn test_idempotent_on_samples() {
        for raw in ["16M", "0x10", "1.50", "b, a", "5,", "", "-0", "1G,2K"] {
            let once = normalize(raw.into());
            assert_eq!(normalize(once.clone()), once, "not idempotent for {:?}", raw);
        }
    }
}
