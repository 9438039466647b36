//! Property tests for the normalizer pipeline and the diff engine.

use cnfdiff_core::{compare, normalize, ConfigSource, Value};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        Just(Value::Null),
        // Shapes the stages recognise
        "[+-]?[0-9]{0,25}(\\.[0-9]{0,6})?".prop_map(Value::Str),
        "[0-9]{1,20}[kKmMgGtTpPeE]".prop_map(Value::Str),
        "[A-Za-z0-9_ ]{0,8}(,[A-Za-z0-9_ ]{0,8}){0,4}".prop_map(Value::Str),
        // Anything else
        ".{0,16}".prop_map(Value::Str),
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent(v in any_value()) {
        let once = normalize(v);
        prop_assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn normalize_is_deterministic(v in any_value()) {
        prop_assert_eq!(normalize(v.clone()), normalize(v));
    }

    #[test]
    fn size_suffix_equals_byte_count(n in 0i64..1_000_000) {
        let kib = normalize(Value::Str(format!("{n}K")));
        let bytes = normalize(Value::Str((n * 1024).to_string()));
        prop_assert_eq!(kib, bytes);
    }

    #[test]
    fn leading_zeros_ignored(n in 0u32..1_000_000, zeros in 0usize..5) {
        let padded = format!("{}{}", "0".repeat(zeros), n);
        prop_assert_eq!(normalize(Value::Str(padded)), normalize(Value::Str(n.to_string())));
    }

    #[test]
    fn set_order_ignored(mut tokens in prop::collection::vec("[A-Z_]{1,10}", 2..6)) {
        let forward = tokens.join(",");
        tokens.reverse();
        let backward = tokens.join(",");
        prop_assert_eq!(normalize(Value::Str(forward)), normalize(Value::Str(backward)));
    }

    #[test]
    fn equal_sources_have_empty_diff(
        entries in prop::collection::btree_map("[a-z_]{1,12}", any_value(), 0..20),
        live in any::<bool>(),
    ) {
        let build = |name: &str| {
            let entries: BTreeMap<String, Value> = entries.clone();
            if live {
                ConfigSource::new(cnfdiff_core::SourceKind::Live, name, entries)
            } else {
                ConfigSource::new(cnfdiff_core::SourceKind::File, name, entries)
            }
        };
        prop_assert!(compare(&[build("a"), build("b")]).is_empty());
    }
}
