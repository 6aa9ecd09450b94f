//! Recursive merging of [`serde_json::Value`] trees.
//!
//! Objects merge key by key. Everything else is atomic: a present overlay
//! value replaces the base value, except for arrays when [`ArrayMerge`] says
//! otherwise.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─── Options ────────────────────────────────────────────────────────────────

/// How two arrays at the same position are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayMerge {
    /// The overlay array replaces the base array.
    #[default]
    Replace,
    /// Base elements followed by overlay elements.
    Combine,
    /// Like `Combine`, keeping only the first occurrence of equal elements.
    Unique,
}

/// Merge configuration. The default replaces arrays and treats `null` as a
/// real value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    #[serde(default)]
    pub arrays: ArrayMerge,
    /// When set, a `null` in the overlay leaves the base value untouched.
    #[serde(default)]
    pub skip_nulls: bool,
}

impl MergeOptions {
    pub fn with_arrays(mut self, arrays: ArrayMerge) -> Self {
        self.arrays = arrays;
        self
    }

    pub fn with_skip_nulls(mut self, skip_nulls: bool) -> Self {
        self.skip_nulls = skip_nulls;
        self
    }
}

// ─── Merging ────────────────────────────────────────────────────────────────

/// Merges `overlay` onto a copy of `base` using the default options.
///
/// Neither input is modified.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    deep_merge_with(base, overlay, &MergeOptions::default())
}

/// Merges `overlay` onto a copy of `base`.
pub fn deep_merge_with(base: &Value, overlay: &Value, options: &MergeOptions) -> Value {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay, options);
    merged
}

/// Merges `overlay` into `target` in place.
///
/// Keys only present in `overlay` are appended after the existing keys, in
/// overlay order.
pub fn merge_into(target: &mut Value, overlay: &Value, options: &MergeOptions) {
    if overlay.is_null() && options.skip_nulls {
        return;
    }

    match (target, overlay) {
        (Value::Object(target_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match target_map.get_mut(key) {
                    Some(existing) => merge_into(existing, value, options),
                    None => {
                        if value.is_null() && options.skip_nulls {
                            continue;
                        }
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(target_items), Value::Array(overlay_items)) => match options.arrays {
            ArrayMerge::Replace => *target_items = overlay_items.clone(),
            ArrayMerge::Combine => target_items.extend(overlay_items.iter().cloned()),
            ArrayMerge::Unique => {
                let mut combined: Vec<Value> =
                    Vec::with_capacity(target_items.len() + overlay_items.len());
                for item in target_items.drain(..).chain(overlay_items.iter().cloned()) {
                    if !combined.contains(&item) {
                        combined.push(item);
                    }
                }
                *target_items = combined;
            }
        },
        (target, overlay) => {
            *target = overlay.clone();
        }
    }
}

/// Folds every source into the first, left to right.
///
/// Returns `Value::Null` when `sources` is empty.
pub fn merge_all<'a, I>(sources: I, options: &MergeOptions) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut sources = sources.into_iter();
    let mut merged = match sources.next() {
        Some(first) => first.clone(),
        None => return Value::Null,
    };
    for source in sources {
        merge_into(&mut merged, source, options);
    }
    merged
}
