#![no_main]

use arbitrary::Arbitrary;
use deep_builder::{ArrayMerge, MergeOptions, deep_merge_with};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Arbitrary, Debug)]
struct Input {
    base: String,
    overlay: String,
    arrays: u8,
    skip_nulls: bool,
}

fuzz_target!(|input: Input| {
    let (Ok(base), Ok(overlay)) = (
        serde_json::from_str::<Value>(&input.base),
        serde_json::from_str::<Value>(&input.overlay),
    ) else {
        return;
    };

    let arrays = match input.arrays % 3 {
        0 => ArrayMerge::Replace,
        1 => ArrayMerge::Combine,
        _ => ArrayMerge::Unique,
    };
    let options = MergeOptions::default()
        .with_arrays(arrays)
        .with_skip_nulls(input.skip_nulls);

    let merged = deep_merge_with(&base, &overlay, &options);

    // Object onto object never drops a base key.
    if let (Some(base_map), Some(merged_map)) = (base.as_object(), merged.as_object()) {
        if overlay.is_object() {
            for key in base_map.keys() {
                assert!(merged_map.contains_key(key), "dropped key {:?}", key);
            }
        }
    }
});
