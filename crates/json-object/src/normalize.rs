//! Conversion of host values into the canonical [`Value`] model.
//!
//! The normalizer is a [`serde::Serializer`] whose output is a [`Value`]. Each
//! `serialize_*` method handles one shape of host data, so the dispatch that
//! decides how a value is converted is resolved statically by the value's
//! `Serialize` impl:
//!
//! - `Option`, `Box` and `&T` are unwrapped to whatever they
//!   hold, however deeply nested; `None` becomes `Null`.
//! - Byte buffers (`serde_bytes::Bytes`, `serde_bytes::ByteBuf`) become
//!   strings, decoded as UTF-8 text.
//! - Every signed and unsigned integer width and `f32` become `Number`.
//! - Maps and structs become objects. A map whose keys are not strings fails
//!   for its whole subtree.
//! - Sequences, tuples and sets become arrays.
//! - An existing [`Value`] or [`Document`] comes out equal to itself.
//!
//! [`normalize`] never fails: a subtree that cannot be converted is dropped
//! and logged. [`try_normalize`] reports the first such subtree instead.

use std::fmt;

use serde::ser::{self, Impossible, Serialize};
use thiserror::Error;

pub use serde_bytes::{ByteBuf, Bytes};

use crate::document::Document;
use crate::value::{number, Value};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("map key must be a string, found {found}")]
    NonStringKey { found: &'static str },
    #[error("{0}")]
    Custom(String),
}

impl ser::Error for NormalizeError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        NormalizeError::Custom(msg.to_string())
    }
}

/// Convert any serializable value into the canonical model.
///
/// Subtrees that cannot be represented (maps with non-string keys, or values
/// whose `Serialize` impl fails) are omitted from their parent object,
/// replaced by `Null` inside their parent array, and reported with
/// `tracing::error!`. If the top-level value itself fails the result is
/// `Null`.
///
/// # Example
///
/// ```
/// use json_object::{normalize, Bytes, Value};
///
/// assert_eq!(normalize(&Some(Some(7u8))), Value::Number(7.0));
/// assert_eq!(normalize(Bytes::new(b"hi")), Value::from("hi"));
/// assert_eq!(normalize(&None::<i32>), Value::Null);
/// ```
pub fn normalize<T: Serialize + ?Sized>(value: &T) -> Value {
    match value.serialize(Normalizer::lenient()) {
        Ok(v) => v,
        Err(err) => {
            tracing::error!(error = %err, "value cannot be normalized, using null");
            Value::Null
        }
    }
}

/// Convert any serializable value into the canonical model, failing on the
/// first subtree that cannot be represented.
///
/// # Errors
///
/// Returns [`NormalizeError::NonStringKey`] for a map keyed by anything other
/// than strings, and [`NormalizeError::Custom`] when a `Serialize` impl
/// reports its own error.
pub fn try_normalize<T: Serialize + ?Sized>(value: &T) -> Result<Value, NormalizeError> {
    value.serialize(Normalizer::strict())
}

/// The serializer behind [`normalize`] and [`try_normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    lenient: bool,
}

impl Normalizer {
    /// Drop failing subtrees and keep going.
    pub fn lenient() -> Self {
        Self { lenient: true }
    }

    /// Abort on the first failing subtree.
    pub fn strict() -> Self {
        Self { lenient: false }
    }

    /// Normalize a child of a container. `Ok(None)` means the child failed
    /// and was dropped.
    fn child<T: Serialize + ?Sized>(
        self,
        value: &T,
        at: &dyn fmt::Display,
    ) -> Result<Option<Value>, NormalizeError> {
        match value.serialize(self) {
            Ok(v) => Ok(Some(v)),
            Err(err) if self.lenient => {
                tracing::error!(at = %at, error = %err, "dropping value that cannot be normalized");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn single_entry(self, key: &'static str, value: Value) -> Value {
        let mut doc = Document::new();
        doc.insert(key, value);
        Value::Object(doc)
    }
}

impl ser::Serializer for Normalizer {
    type Ok = Value;
    type Error = NormalizeError;

    type SerializeSeq = SeqNormalizer;
    type SerializeTuple = SeqNormalizer;
    type SerializeTupleStruct = SeqNormalizer;
    type SerializeTupleVariant = TupleVariantNormalizer;
    type SerializeMap = MapNormalizer;
    type SerializeStruct = MapNormalizer;
    type SerializeStructVariant = StructVariantNormalizer;

    fn serialize_bool(self, v: bool) -> Result<Value, NormalizeError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, NormalizeError> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, NormalizeError> {
        Ok(number(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, NormalizeError> {
        Ok(number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value, NormalizeError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, NormalizeError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, NormalizeError> {
        Ok(Value::String(String::from_utf8_lossy(v).into_owned()))
    }

    fn serialize_none(self) -> Result<Value, NormalizeError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, NormalizeError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, NormalizeError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, NormalizeError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, NormalizeError> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, NormalizeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, NormalizeError> {
        match self.child(value, &variant)? {
            Some(inner) => Ok(self.single_entry(variant, inner)),
            None => Ok(Value::Object(Document::new())),
        }
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqNormalizer, NormalizeError> {
        Ok(SeqNormalizer {
            normalizer: self,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqNormalizer, NormalizeError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqNormalizer, NormalizeError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantNormalizer, NormalizeError> {
        Ok(TupleVariantNormalizer {
            variant,
            seq: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapNormalizer, NormalizeError> {
        Ok(MapNormalizer {
            normalizer: self,
            doc: Document::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<MapNormalizer, NormalizeError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructVariantNormalizer, NormalizeError> {
        Ok(StructVariantNormalizer {
            variant,
            map: self.serialize_map(Some(len))?,
        })
    }
}

#[doc(hidden)]
pub struct SeqNormalizer {
    normalizer: Normalizer,
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), NormalizeError> {
        let index = self.items.len();
        // Dropped elements keep their slot so sibling indices stay stable
        let item = self.normalizer.child(value, &index)?.unwrap_or(Value::Null);
        self.items.push(item);
        Ok(())
    }

    fn end(self) -> Result<Value, NormalizeError> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), NormalizeError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, NormalizeError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), NormalizeError> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, NormalizeError> {
        ser::SerializeSeq::end(self)
    }
}

#[doc(hidden)]
pub struct TupleVariantNormalizer {
    variant: &'static str,
    seq: SeqNormalizer,
}

impl ser::SerializeTupleVariant for TupleVariantNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), NormalizeError> {
        ser::SerializeSeq::serialize_element(&mut self.seq, value)
    }

    fn end(self) -> Result<Value, NormalizeError> {
        let normalizer = self.seq.normalizer;
        let items = ser::SerializeSeq::end(self.seq)?;
        Ok(normalizer.single_entry(self.variant, items))
    }
}

#[doc(hidden)]
pub struct MapNormalizer {
    normalizer: Normalizer,
    doc: Document,
    pending_key: Option<String>,
}

impl MapNormalizer {
    fn insert<T: ?Sized + Serialize>(&mut self, key: String, value: &T) -> Result<(), NormalizeError> {
        if let Some(v) = self.normalizer.child(value, &key)? {
            self.doc.insert(key, v);
        }
        Ok(())
    }
}

impl ser::SerializeMap for MapNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), NormalizeError> {
        // A bad key fails the whole map, not just this entry
        self.pending_key = Some(key.serialize(KeyNormalizer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), NormalizeError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| NormalizeError::Custom("map value without a key".to_string()))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, NormalizeError> {
        Ok(Value::Object(self.doc))
    }
}

impl ser::SerializeStruct for MapNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), NormalizeError> {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value, NormalizeError> {
        ser::SerializeMap::end(self)
    }
}

#[doc(hidden)]
pub struct StructVariantNormalizer {
    variant: &'static str,
    map: MapNormalizer,
}

impl ser::SerializeStructVariant for StructVariantNormalizer {
    type Ok = Value;
    type Error = NormalizeError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), NormalizeError> {
        self.map.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value, NormalizeError> {
        let normalizer = self.map.normalizer;
        Ok(normalizer.single_entry(self.variant, Value::Object(self.map.doc)))
    }
}

/// Accepts string-like map keys and nothing else. Numbers are not turned
/// into strings.
struct KeyNormalizer;

fn key_error(found: &'static str) -> NormalizeError {
    NormalizeError::NonStringKey { found }
}

impl ser::Serializer for KeyNormalizer {
    type Ok = String;
    type Error = NormalizeError;

    type SerializeSeq = Impossible<String, NormalizeError>;
    type SerializeTuple = Impossible<String, NormalizeError>;
    type SerializeTupleStruct = Impossible<String, NormalizeError>;
    type SerializeTupleVariant = Impossible<String, NormalizeError>;
    type SerializeMap = Impossible<String, NormalizeError>;
    type SerializeStruct = Impossible<String, NormalizeError>;
    type SerializeStructVariant = Impossible<String, NormalizeError>;

    fn serialize_str(self, v: &str) -> Result<String, NormalizeError> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String, NormalizeError> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, NormalizeError> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, NormalizeError> {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<String, NormalizeError> {
        Err(key_error("boolean"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_i128(self, _v: i128) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_u128(self, _v: u128) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String, NormalizeError> {
        Err(key_error("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String, NormalizeError> {
        Err(key_error("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, NormalizeError> {
        Err(key_error("float"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, NormalizeError> {
        Err(key_error("bytes"))
    }

    fn serialize_none(self) -> Result<String, NormalizeError> {
        Err(key_error("option"))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<String, NormalizeError> {
        Err(key_error("option"))
    }

    fn serialize_unit(self) -> Result<String, NormalizeError> {
        Err(key_error("unit"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, NormalizeError> {
        Err(key_error("unit struct"))
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, NormalizeError> {
        Err(key_error("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NormalizeError> {
        Err(key_error("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NormalizeError> {
        Err(key_error("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, NormalizeError> {
        Err(key_error("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, NormalizeError> {
        Err(key_error("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NormalizeError> {
        Err(key_error("map"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, NormalizeError> {
        Err(key_error("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, NormalizeError> {
        Err(key_error("enum variant"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Serialize)]
    struct Account {
        id: u64,
        name: String,
        ratio: f32,
        tags: Vec<&'static str>,
        parent: Option<Box<Account>>,
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Rect { w: u8, h: u8 },
        Pair(i8, i8),
    }

    fn obj(entries: &[(&str, Value)]) -> Value {
        Value::Object(entries.iter().cloned().collect())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(normalize(&true), Value::Bool(true));
        assert_eq!(normalize(&-5i64), Value::Number(-5.0));
        assert_eq!(normalize(&u32::MAX), Value::Number(u32::MAX as f64));
        assert_eq!(normalize(&1.5f32), Value::Number(1.5));
        assert_eq!(normalize(&'x'), Value::from("x"));
        assert_eq!(normalize("text"), Value::from("text"));
        assert_eq!(normalize(&()), Value::Null);
        assert_eq!(normalize(&f64::NAN), Value::Null);
    }

    #[test]
    fn test_references_are_fully_unwrapped() {
        let n = 9i16;
        let chain: Option<Option<Box<&i16>>> = Some(Some(Box::new(&n)));
        assert_eq!(normalize(&chain), Value::Number(9.0));

        let absent: Option<Box<Option<i16>>> = Some(Box::new(None));
        assert_eq!(normalize(&absent), Value::Null);
    }

    #[test]
    fn test_bytes_become_text() {
        assert_eq!(normalize(Bytes::new(b"hello")), Value::from("hello"));
        assert_eq!(
            normalize(&ByteBuf::from(vec![0xe2, 0x82, 0xac])),
            Value::from("\u{20ac}")
        );
        assert_eq!(normalize(Bytes::new(&[0xff])), Value::from("\u{fffd}"));

        // A plain Vec<u8> is a sequence of integers
        assert_eq!(normalize(&vec![1u8, 2]), Value::from(vec![1, 2]));
    }

    #[test]
    fn test_struct_and_nesting() {
        let account = Account {
            id: 7,
            name: "root".into(),
            ratio: 0.5,
            tags: vec!["a"],
            parent: Some(Box::new(Account {
                id: 1,
                name: "p".into(),
                ratio: 0.25,
                tags: vec![],
                parent: None,
            })),
        };

        let expected = obj(&[
            ("id", 7.into()),
            ("name", "root".into()),
            ("ratio", 0.5.into()),
            ("tags", vec!["a"].into()),
            (
                "parent",
                obj(&[
                    ("id", 1.into()),
                    ("name", "p".into()),
                    ("ratio", 0.25.into()),
                    ("tags", Value::Array(vec![])),
                    ("parent", Value::Null),
                ]),
            ),
        ]);
        assert_eq!(normalize(&account), expected);
    }

    #[test]
    fn test_enums_are_externally_tagged() {
        assert_eq!(normalize(&Shape::Empty), Value::from("Empty"));
        assert_eq!(
            normalize(&Shape::Circle(2.0)),
            obj(&[("Circle", 2.into())])
        );
        assert_eq!(
            normalize(&Shape::Rect { w: 1, h: 2 }),
            obj(&[("Rect", obj(&[("w", 1.into()), ("h", 2.into())]))])
        );
        assert_eq!(
            normalize(&Shape::Pair(-1, 1)),
            obj(&[("Pair", vec![-1, 1].into())])
        );
    }

    #[test]
    fn test_string_keyed_maps() {
        let mut m = HashMap::new();
        m.insert("a".to_string(), vec![Some(1u8), None]);
        assert_eq!(
            normalize(&m),
            obj(&[("a", Value::Array(vec![1.into(), Value::Null]))])
        );

        let mut chars = BTreeMap::new();
        chars.insert('k', 1);
        assert_eq!(normalize(&chars), obj(&[("k", 1.into())]));
    }

    #[test]
    fn test_non_string_keys_strict() {
        let mut m = HashMap::new();
        m.insert(1, "one");
        assert_eq!(
            try_normalize(&m),
            Err(NormalizeError::NonStringKey { found: "integer" })
        );

        let mut nested = BTreeMap::new();
        nested.insert("ok", m);
        assert!(try_normalize(&nested).is_err());
    }

    #[test]
    fn test_non_string_keys_lenient() {
        let mut bad = HashMap::new();
        bad.insert(true, 1);

        // Top level degrades to null
        assert_eq!(normalize(&bad), Value::Null);

        // Omitted from a parent object
        let mut parent = BTreeMap::new();
        parent.insert("bad", bad.clone());
        let mut good = HashMap::new();
        good.insert(false, 2);
        parent.insert("also_bad", good);
        assert_eq!(normalize(&parent), obj(&[]));

        // Null inside a parent array
        let list = vec![bad, HashMap::new()];
        assert_eq!(
            normalize(&list),
            Value::Array(vec![Value::Null, obj(&[])])
        );
    }

    #[test]
    fn test_canonical_values_pass_through() {
        let doc: Document = [("a", Value::from(vec![1, 2])), ("b", Value::Null)]
            .into_iter()
            .collect();
        let value = Value::Object(doc.clone());
        assert_eq!(normalize(&value), value);
        assert_eq!(normalize(&doc), value);
        assert_eq!(try_normalize(&value), Ok(value.clone()));
    }

    #[test]
    fn test_serde_json_values() {
        let v = serde_json::json!({"n": 1, "list": [true, null, "s"], "f": 2.5});
        let expected = obj(&[
            ("n", 1.into()),
            ("list", Value::Array(vec![true.into(), Value::Null, "s".into()])),
            ("f", 2.5.into()),
        ]);
        assert_eq!(normalize(&v), expected);
    }
}
