#![no_main]

use deep_builder::{DeepPartial, builder_for, parse_partial};
use libfuzzer_sys::fuzz_target;
use serde_json::{Value, json};

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let Ok(partial) = parse_partial::<Value>(&s) else {
        return;
    };

    let builder = builder_for(json!({"name": "", "settings": {"theme": "light"}}));
    let built = builder
        .build_owned(Some(&partial))
        .expect("value targets accept any merged tree");
    let again = builder
        .build_owned(Some(&DeepPartial::from_value(partial.into_value())))
        .expect("value targets accept any merged tree");
    assert_eq!(built, again);
});
