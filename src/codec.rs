//! Conversion between typed values and the JSON trees they are merged as.
//!
//! `serde_json::to_value` maps non-finite floats to `null` and rejects
//! integers wider than 64 bits, so a base holding either would fail to come
//! back out of its own tree. Here they travel as strings (`"NaN"`,
//! `"Infinity"`, `"-Infinity"`, decimal digits) and are read back whenever
//! the target field asks for a float or a 128-bit integer. Decode errors
//! carry the dot-path of the value that failed.

use serde::de::value::StringDeserializer;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess, SeqAccess,
    Unexpected, VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;
use serde::ser::{self, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

const NAN: &str = "NaN";
const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";

/// Converts `value` into a JSON tree.
pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Value, CodecError> {
    value.serialize(TreeSerializer)
}

/// Reads a `T` back out of a JSON tree.
pub(crate) fn decode<T: DeserializeOwned>(tree: Value) -> Result<T, CodecError> {
    T::deserialize(TreeDeserializer {
        value: tree,
        path: String::new(),
    })
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct CodecError {
    pub(crate) message: String,
    pub(crate) path: Option<String>,
}

impl CodecError {
    /// Records `path` unless a deeper path was already recorded.
    fn at(mut self, path: &str) -> Self {
        if self.path.is_none() && !path.is_empty() {
            self.path = Some(path.to_string());
        }
        self
    }

    /// Prefixes the recorded path with the enclosing `key`.
    fn within(mut self, key: &str) -> Self {
        self.path = Some(match self.path.take() {
            Some(inner) => child_path(key, &inner),
            None => key.to_string(),
        });
        self
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodecError {}

impl ser::Error for CodecError {
    fn custom<M: fmt::Display>(msg: M) -> Self {
        CodecError {
            message: msg.to_string(),
            path: None,
        }
    }
}

impl de::Error for CodecError {
    fn custom<M: fmt::Display>(msg: M) -> Self {
        CodecError {
            message: msg.to_string(),
            path: None,
        }
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn non_finite_token(f: f64) -> &'static str {
    if f.is_nan() {
        NAN
    } else if f.is_sign_positive() {
        INFINITY
    } else {
        NEG_INFINITY
    }
}

fn parse_non_finite(s: &str) -> Option<f64> {
    match s {
        NAN => Some(f64::NAN),
        INFINITY => Some(f64::INFINITY),
        NEG_INFINITY => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

// ─── Encoding ───────────────────────────────────────────────────────────────

struct TreeSerializer;

impl ser::Serializer for TreeSerializer {
    type Ok = Value;
    type Error = CodecError;
    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = VariantSeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = VariantMapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, CodecError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, CodecError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, CodecError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, CodecError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, CodecError> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, CodecError> {
        Ok(match i64::try_from(v) {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(v.to_string()),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<Value, CodecError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, CodecError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, CodecError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, CodecError> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, CodecError> {
        Ok(match u64::try_from(v) {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(v.to_string()),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value, CodecError> {
        if v.is_finite() {
            Ok(Value::from(v))
        } else {
            self.serialize_f64(f64::from(v))
        }
    }

    fn serialize_f64(self, v: f64) -> Result<Value, CodecError> {
        Ok(match Number::from_f64(v) {
            Some(n) => Value::Number(n),
            None => Value::String(non_finite_token(v).to_string()),
        })
    }

    fn serialize_char(self, v: char) -> Result<Value, CodecError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, CodecError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, CodecError> {
        Ok(Value::Array(v.iter().map(|b| Value::from(*b)).collect()))
    }

    fn serialize_none(self) -> Result<Value, CodecError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, CodecError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, CodecError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, CodecError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, CodecError> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, CodecError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, CodecError> {
        Ok(tagged(variant, encode(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, CodecError> {
        Ok(SeqBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, CodecError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, CodecError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqBuilder, CodecError> {
        Ok(VariantSeqBuilder {
            variant,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder, CodecError> {
        Ok(MapBuilder {
            map: Map::new(),
            next_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<MapBuilder, CodecError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<VariantMapBuilder, CodecError> {
        Ok(VariantMapBuilder {
            variant,
            map: Map::new(),
        })
    }
}

/// Externally tagged enum form: `{ "Variant": value }`.
fn tagged(variant: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(variant.to_string(), value);
    Value::Object(map)
}

/// Object keys must end up as strings; scalar keys are stringified the way
/// `serde_json` does it.
fn map_key(key: Value) -> Result<String, CodecError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ser::Error::custom("map keys must be strings, numbers or booleans")),
    }
}

struct SeqBuilder {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        self.items.push(encode(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, CodecError> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, CodecError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, CodecError> {
        ser::SerializeSeq::end(self)
    }
}

struct VariantSeqBuilder {
    variant: &'static str,
    items: Vec<Value>,
}

impl ser::SerializeTupleVariant for VariantSeqBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        self.items.push(encode(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value, CodecError> {
        Ok(tagged(self.variant, Value::Array(self.items)))
    }
}

struct MapBuilder {
    map: Map<String, Value>,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), CodecError> {
        self.next_key = Some(map_key(encode(key)?)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), CodecError> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| <CodecError as ser::Error>::custom("map value without a key"))?;
        let value = encode(value).map_err(|e| e.within(&key))?;
        self.map.insert(key, value);
        Ok(())
    }

    fn end(self) -> Result<Value, CodecError> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CodecError> {
        let value = encode(value).map_err(|e| e.within(key))?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn end(self) -> Result<Value, CodecError> {
        Ok(Value::Object(self.map))
    }
}

struct VariantMapBuilder {
    variant: &'static str,
    map: Map<String, Value>,
}

impl ser::SerializeStructVariant for VariantMapBuilder {
    type Ok = Value;
    type Error = CodecError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), CodecError> {
        let value = encode(value).map_err(|e| e.within(key))?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn end(self) -> Result<Value, CodecError> {
        Ok(tagged(self.variant, Value::Object(self.map)))
    }
}

// ─── Decoding ───────────────────────────────────────────────────────────────

struct TreeDeserializer {
    value: Value,
    path: String,
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => Unexpected::Unsigned(u),
            (_, Some(i), _) => Unexpected::Signed(i),
            (_, _, Some(f)) => Unexpected::Float(f),
            _ => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// A bare variant name, as used for unit variants.
fn unit_variant(name: String) -> StringDeserializer<CodecError> {
    name.into_deserializer()
}

fn visit_number<'de, V: Visitor<'de>>(n: &Number, visitor: V) -> Result<V::Value, CodecError> {
    if let Some(u) = n.as_u64() {
        visitor.visit_u64(u)
    } else if let Some(i) = n.as_i64() {
        visitor.visit_i64(i)
    } else if let Some(f) = n.as_f64() {
        visitor.visit_f64(f)
    } else {
        Err(de::Error::custom(format!("unsupported number {}", n)))
    }
}

impl<'de> de::Deserializer<'de> for TreeDeserializer {
    type Error = CodecError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => visit_number(&n, visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => {
                let len = items.len();
                let mut seq = SeqTree {
                    iter: items.into_iter(),
                    index: 0,
                    path: self.path,
                };
                let value = visitor.visit_seq(&mut seq)?;
                if seq.iter.len() == 0 {
                    Ok(value)
                } else {
                    Err(de::Error::invalid_length(len, &"fewer elements in array"))
                }
            }
            Value::Object(map) => visitor.visit_map(MapTree {
                iter: map.into_iter(),
                pending: None,
                path: self.path,
            }),
        }
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        if let Value::String(s) = &self.value {
            if let Some(f) = parse_non_finite(s) {
                return visitor.visit_f32(f as f32);
            }
        }
        self.deserialize_any(visitor)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        if let Value::String(s) = &self.value {
            if let Some(f) = parse_non_finite(s) {
                return visitor.visit_f64(f);
            }
        }
        self.deserialize_any(visitor)
    }

    fn deserialize_i128<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        if let Value::String(s) = &self.value {
            if let Ok(n) = s.parse::<i128>() {
                return visitor.visit_i128(n);
            }
        }
        self.deserialize_any(visitor)
    }

    fn deserialize_u128<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        if let Value::String(s) = &self.value {
            if let Ok(n) = s.parse::<u128>() {
                return visitor.visit_u128(n);
            }
        }
        self.deserialize_any(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        if self.value.is_null() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        match self.value {
            Value::String(variant) => visitor.visit_enum(unit_variant(variant)),
            Value::Object(map) if map.len() == 1 => match map.into_iter().next() {
                Some((variant, value)) => visitor.visit_enum(EnumTree {
                    variant,
                    value,
                    path: self.path,
                }),
                None => Err(de::Error::invalid_length(0, &"a single-key map")),
            },
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a variant name or a single-key map",
            )),
        }
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        visitor.visit_unit()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 u8 u16 u32 u64 char str string bytes byte_buf unit
        unit_struct seq tuple tuple_struct map struct identifier
    }
}

struct SeqTree {
    iter: std::vec::IntoIter<Value>,
    index: usize,
    path: String,
}

impl<'de> SeqAccess<'de> for SeqTree {
    type Error = CodecError;

    fn next_element_seed<S: DeserializeSeed<'de>>(
        &mut self,
        seed: S,
    ) -> Result<Option<S::Value>, CodecError> {
        let Some(value) = self.iter.next() else {
            return Ok(None);
        };
        let path = format!("{}[{}]", self.path, self.index);
        self.index += 1;
        seed.deserialize(TreeDeserializer {
            value,
            path: path.clone(),
        })
        .map(Some)
        .map_err(|e| e.at(&path))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapTree {
    iter: serde_json::map::IntoIter,
    pending: Option<(String, Value)>,
    path: String,
}

impl<'de> MapAccess<'de> for MapTree {
    type Error = CodecError;

    fn next_key_seed<S: DeserializeSeed<'de>>(
        &mut self,
        seed: S,
    ) -> Result<Option<S::Value>, CodecError> {
        let Some((key, value)) = self.iter.next() else {
            return Ok(None);
        };
        let path = child_path(&self.path, &key);
        let key = seed
            .deserialize(KeyDeserializer { key })
            .map_err(|e| e.at(&path))?;
        self.pending = Some((path, value));
        Ok(Some(key))
    }

    fn next_value_seed<S: DeserializeSeed<'de>>(
        &mut self,
        seed: S,
    ) -> Result<S::Value, CodecError> {
        let Some((path, value)) = self.pending.take() else {
            return Err(de::Error::custom("map value requested before its key"));
        };
        seed.deserialize(TreeDeserializer {
            value,
            path: path.clone(),
        })
        .map_err(|e| e.at(&path))
    }

    fn size_hint(&self) -> Option<usize> {
        self.iter.size_hint().1
    }
}

/// Object keys arrive as strings; map types with integer or boolean keys
/// get them parsed back.
struct KeyDeserializer {
    key: String,
}

macro_rules! parse_key {
    ($($method:ident => $visit:ident,)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
                match self.key.parse() {
                    Ok(parsed) => visitor.$visit(parsed),
                    Err(_) => visitor.visit_string(self.key),
                }
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for KeyDeserializer {
    type Error = CodecError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        visitor.visit_string(self.key)
    }

    parse_key! {
        deserialize_bool => visit_bool,
        deserialize_i8 => visit_i8,
        deserialize_i16 => visit_i16,
        deserialize_i32 => visit_i32,
        deserialize_i64 => visit_i64,
        deserialize_i128 => visit_i128,
        deserialize_u8 => visit_u8,
        deserialize_u16 => visit_u16,
        deserialize_u32 => visit_u32,
        deserialize_u64 => visit_u64,
        deserialize_u128 => visit_u128,
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, CodecError> {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        visitor.visit_enum(unit_variant(self.key))
    }

    forward_to_deserialize_any! {
        f32 f64 char str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct EnumTree {
    variant: String,
    value: Value,
    path: String,
}

impl<'de> EnumAccess<'de> for EnumTree {
    type Error = CodecError;
    type Variant = VariantTree;

    fn variant_seed<S: DeserializeSeed<'de>>(
        self,
        seed: S,
    ) -> Result<(S::Value, VariantTree), CodecError> {
        let path = child_path(&self.path, &self.variant);
        let variant = seed
            .deserialize(KeyDeserializer { key: self.variant })
            .map_err(|e| e.at(&path))?;
        Ok((
            variant,
            VariantTree {
                value: self.value,
                path,
            },
        ))
    }
}

struct VariantTree {
    value: Value,
    path: String,
}

impl VariantTree {
    fn into_parts(self) -> (TreeDeserializer, String) {
        let path = self.path.clone();
        (
            TreeDeserializer {
                value: self.value,
                path: self.path,
            },
            path,
        )
    }
}

impl<'de> VariantAccess<'de> for VariantTree {
    type Error = CodecError;

    fn unit_variant(self) -> Result<(), CodecError> {
        match self.value {
            Value::Null => Ok(()),
            other => {
                let err: CodecError = de::Error::invalid_type(unexpected(&other), &"unit variant");
                Err(err.at(&self.path))
            }
        }
    }

    fn newtype_variant_seed<S: DeserializeSeed<'de>>(
        self,
        seed: S,
    ) -> Result<S::Value, CodecError> {
        let (deserializer, path) = self.into_parts();
        seed.deserialize(deserializer).map_err(|e| e.at(&path))
    }

    fn tuple_variant<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        let (deserializer, path) = self.into_parts();
        de::Deserializer::deserialize_seq(deserializer, visitor).map_err(|e| e.at(&path))
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, CodecError> {
        let (deserializer, path) = self.into_parts();
        de::Deserializer::deserialize_map(deserializer, visitor).map_err(|e| e.at(&path))
    }
}
