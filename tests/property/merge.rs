use super::common::{arb_json, arb_object, leaves, lookup};
use deep_builder::{MergeOptions, deep_merge, merge_all};
use proptest::prelude::*;
use serde_json::{Map, Value};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn inputs_are_not_mutated(base in arb_json(3), overlay in arb_json(3)) {
        let base_before = base.clone();
        let overlay_before = overlay.clone();
        let _ = deep_merge(&base, &overlay);
        prop_assert_eq!(base, base_before);
        prop_assert_eq!(overlay, overlay_before);
    }

    #[test]
    fn empty_object_overlay_is_identity(base in arb_object(3)) {
        let merged = deep_merge(&base, &Value::Object(Map::new()));
        prop_assert_eq!(merged, base);
    }

    #[test]
    fn merging_with_itself_is_identity(value in arb_json(3)) {
        prop_assert_eq!(deep_merge(&value, &value), value);
    }

    #[test]
    fn repeated_merge_is_stable(base in arb_object(3), overlay in arb_object(3)) {
        let once = deep_merge(&base, &overlay);
        let twice = deep_merge(&once, &overlay);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn overlay_leaves_win(base in arb_object(3), overlay in arb_object(3)) {
        let merged = deep_merge(&base, &overlay);
        for (path, leaf) in leaves(&overlay) {
            // Empty objects merge into whatever the base holds.
            if path.is_empty() || leaf.is_object() {
                continue;
            }
            prop_assert_eq!(lookup(&merged, &path), Some(&leaf), "path {}", path);
        }
    }

    #[test]
    fn untouched_keys_keep_base_values(base in arb_object(3), overlay in arb_object(3)) {
        let merged = deep_merge(&base, &overlay);
        let base_map = base.as_object().unwrap();
        let overlay_map = overlay.as_object().unwrap();
        for (key, value) in base_map {
            if !overlay_map.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    #[test]
    fn base_keys_are_never_removed(base in arb_object(3), overlay in arb_object(3)) {
        let merged = deep_merge(&base, &overlay);
        let merged_map = merged.as_object().unwrap();
        for key in base.as_object().unwrap().keys() {
            prop_assert!(merged_map.contains_key(key));
        }
    }

    #[test]
    fn merge_all_matches_pairwise(a in arb_object(2), b in arb_object(2), c in arb_object(2)) {
        let folded = merge_all([&a, &b, &c], &MergeOptions::default());
        prop_assert_eq!(folded, deep_merge(&deep_merge(&a, &b), &c));
    }
}
