//! Deeply-partial overrides.
//!
//! A [`DeepPartial<T>`] is a JSON tree in which every field of `T`, at every
//! depth, may be left out. The type parameter only ties an override to the
//! builder it is meant for; the tree itself is not checked against `T`.

use crate::codec;
use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Override tree for values of type `T`.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct DeepPartial<T> {
    value: Value,
    #[serde(skip)]
    _shape: PhantomData<fn() -> T>,
}

impl<T> DeepPartial<T> {
    /// An override that changes nothing.
    pub fn new() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        DeepPartial {
            value,
            _shape: PhantomData,
        }
    }

    /// Builds an override from any serializable partial shape, typically a
    /// struct of `Option`s.
    ///
    /// `None` fields serialize as `null`; pair this with
    /// [`MergeOptions::skip_nulls`](crate::merge::MergeOptions::skip_nulls)
    /// or `#[serde(skip_serializing_if = "Option::is_none")]` so they leave
    /// the defaults alone.
    pub fn from_serialize<P: Serialize + ?Sized>(partial: &P) -> Result<Self, BuildError> {
        codec::encode(partial)
            .map(Self::from_value)
            .map_err(BuildError::serialization)
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// True when the override is `null` and so stands for "no override".
    pub fn is_absent(&self) -> bool {
        self.value.is_null()
    }

    /// Sets `value` at a dot-separated path, creating intermediate objects.
    ///
    /// Intermediates that are not objects are replaced. An empty path
    /// replaces the whole tree.
    pub fn set(mut self, path: &str, value: Value) -> Self {
        if path.is_empty() {
            self.value = value;
            return self;
        }

        let segments: Vec<&str> = path.split('.').collect();
        self.value = set_path(std::mem::take(&mut self.value), &segments, value);
        self
    }
}

impl<T> Default for DeepPartial<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DeepPartial<T> {
    fn clone(&self) -> Self {
        Self::from_value(self.value.clone())
    }
}

impl<T> PartialEq for DeepPartial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Debug for DeepPartial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeepPartial").field(&self.value).finish()
    }
}

impl<T> From<Value> for DeepPartial<T> {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

fn set_path(node: Value, segments: &[&str], value: Value) -> Value {
    let Some((first, rest)) = segments.split_first() else {
        return value;
    };
    let mut map = match node {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    let slot = map.entry(first.to_string()).or_insert(Value::Null);
    *slot = set_path(std::mem::take(slot), rest, value);
    Value::Object(map)
}

/// Lists the dot-paths of `overlay` whose keys do not exist in `base`.
///
/// Only positions where both sides are objects are compared; a foreign key's
/// own children are not listed.
pub fn foreign_paths(base: &Value, overlay: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_foreign_paths(base, overlay, "", &mut paths);
    paths
}

fn collect_foreign_paths(base: &Value, overlay: &Value, prefix: &str, paths: &mut Vec<String>) {
    let (Some(base_map), Some(overlay_map)) = (base.as_object(), overlay.as_object()) else {
        return;
    };
    for (key, child) in overlay_map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match base_map.get(key) {
            Some(base_child) => collect_foreign_paths(base_child, child, &path, paths),
            None => paths.push(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_creates_intermediate_objects() {
        let partial: DeepPartial<Value> = DeepPartial::new()
            .set("settings.theme", json!("dark"))
            .set("name", json!("Ada"));
        assert_eq!(
            partial.as_value(),
            &json!({"settings": {"theme": "dark"}, "name": "Ada"})
        );
    }

    #[test]
    fn set_replaces_scalar_intermediates() {
        let partial: DeepPartial<Value> =
            DeepPartial::from_value(json!({"a": 1})).set("a.b", json!(2));
        assert_eq!(partial.as_value(), &json!({"a": {"b": 2}}));
    }

    #[test]
    fn set_keeps_sibling_order() {
        let partial: DeepPartial<Value> =
            DeepPartial::from_value(json!({"a": {"x": 1, "y": 2}, "b": 3})).set("a.x", json!(9));
        let keys: Vec<&String> = partial.as_value()["a"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
        assert_eq!(partial.as_value()["a"]["x"], json!(9));
    }

    #[test]
    fn serializes_as_bare_tree() {
        let partial: DeepPartial<Value> = DeepPartial::new().set("x", json!(true));
        assert_eq!(serde_json::to_string(&partial).unwrap(), r#"{"x":true}"#);
        let back: DeepPartial<Value> = serde_json::from_str(r#"{"x":true}"#).unwrap();
        assert_eq!(back, partial);
    }

    #[test]
    fn foreign_paths_stop_at_first_unknown_key() {
        let base = json!({"settings": {"theme": "light"}});
        let overlay = json!({"settings": {"theme": "dark", "font": {"size": 12}}, "extra": 1});
        assert_eq!(foreign_paths(&base, &overlay), vec!["settings.font", "extra"]);
    }
}
