use proptest::prelude::*;
use serde_json::{Value, json};

/// Strategy for arbitrary JSON values nested up to `depth` levels.
pub fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-z]{1,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            arb_object_of(inner),
        ]
    })
}

/// Strategy for JSON objects drawn from a small key alphabet, so that base
/// and override trees overlap often.
pub fn arb_object(depth: u32) -> impl Strategy<Value = Value> {
    arb_object_of(arb_json(depth))
}

fn arb_object_of(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-e]", inner), 0..5).prop_map(|pairs| {
        let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
        Value::Object(map)
    })
}

/// Every dot-path reaching a non-object leaf, with the leaf value.
pub fn leaves(value: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    collect_leaves(value, "", &mut out);
    out
}

fn collect_leaves(value: &Value, prefix: &str, out: &mut Vec<(String, Value)>) {
    match value.as_object() {
        Some(obj) if !obj.is_empty() => {
            for (key, child) in obj {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaves(child, &path, out);
            }
        }
        _ => out.push((prefix.to_string(), value.clone())),
    }
}

/// Follows a dot-path through nested objects.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}
