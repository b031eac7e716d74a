//! Typed reads and path writes on [`Document`].
//!
//! Every typed getter comes in three forms: `get_x_opt` returns `None` when the
//! path is missing or the value does not coerce, `get_x_or` falls back to a
//! caller default, and `get_x` falls back to the type's zero value.

use serde::Serialize;

use crate::document::Document;
use crate::error::DocumentError;
use crate::normalize::normalize;
use crate::resolve::{resolve, resolve_mut, resolve_parent_mut, vivify_parent};
use crate::value::Value;

/// Best-effort conversion of a stored value into a Rust type.
///
/// | Target   | From number          | From string          | From boolean |
/// |----------|----------------------|----------------------|--------------|
/// | `f64`    | as-is                | parsed if finite     | no           |
/// | `i64`    | truncated toward zero| parsed as an integer | no           |
/// | `String` | shortest decimal     | as-is                | no           |
/// | `bool`   | no                   | no                   | as-is        |
///
/// `Vec<T>` coerces from an array only when every element coerces to `T`.
pub trait Coerce: Sized {
    fn coerce(value: &Value) -> Option<Self>;
}

impl Coerce for f64 {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(*n),
            // Out-of-range text such as "1e400" does not coerce
            Value::String(s) => s.parse().ok().filter(|n: &f64| n.is_finite()),
            _ => None,
        }
    }
}

impl Coerce for i64 {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            // `as` truncates and saturates at the i64 bounds
            Value::Number(n) => Some(*n as i64),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl Coerce for String {
    fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl Coerce for bool {
    fn coerce(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<T: Coerce> Coerce for Vec<T> {
    fn coerce(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::coerce).collect()
    }
}

macro_rules! typed_getters {
    ($name:literal, $ty:ty, $default:ty, $zero:expr, $opt:ident, $or:ident, $get:ident) => {
        #[doc = concat!("Get the value at `path` as ", $name, ".")]
        pub fn $opt(&self, path: &str) -> Option<$ty> {
            self.get_as(path)
        }

        #[doc = concat!("Get the value at `path` as ", $name, ", or `default`.")]
        pub fn $or(&self, path: &str, default: $default) -> $ty {
            self.get_as(path).unwrap_or_else(|| default.into())
        }

        pub fn $get(&self, path: &str) -> $ty {
            self.$or(path, $zero)
        }
    };
}

macro_rules! array_getters {
    ($name:literal, $ty:ty, $opt:ident, $get:ident) => {
        #[doc = concat!("Get the array at `path` as ", $name, ", only if every element coerces.")]
        pub fn $opt(&self, path: &str) -> Option<Vec<$ty>> {
            self.get_as(path)
        }

        pub fn $get(&self, path: &str) -> Vec<$ty> {
            self.$opt(path).unwrap_or_default()
        }
    };
}

impl Document {
    /// Get the value at a dotted path.
    ///
    /// See [`resolve`] for how arrays and scalars along the way are treated.
    pub fn get(&self, path: &str) -> Option<&Value> {
        resolve(self, path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        resolve_mut(self, path)
    }

    /// Check if the path resolves. A stored `Null` counts as present.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Get the value at `path` coerced to `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_object::Document;
    ///
    /// let doc: Document = r#"{"port": "8080", "ratio": 2.75}"#.parse().unwrap();
    /// assert_eq!(doc.get_as::<i64>("port"), Some(8080));
    /// assert_eq!(doc.get_as::<i64>("ratio"), Some(2));
    /// assert_eq!(doc.get_as::<bool>("port"), None);
    /// ```
    pub fn get_as<T: Coerce>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(T::coerce)
    }

    pub fn get_or<T: Coerce>(&self, path: &str, default: T) -> T {
        self.get_as(path).unwrap_or(default)
    }

    typed_getters!("a float", f64, f64, 0.0, get_float_opt, get_float_or, get_float);
    typed_getters!("an integer", i64, i64, 0, get_int_opt, get_int_or, get_int);
    typed_getters!("a string", String, &str, "", get_string_opt, get_string_or, get_string);
    typed_getters!("a boolean", bool, bool, false, get_bool_opt, get_bool_or, get_bool);

    array_getters!("floats", f64, get_float_array_opt, get_float_array);
    array_getters!("integers", i64, get_int_array_opt, get_int_array);
    array_getters!("strings", String, get_string_array_opt, get_string_array);
    array_getters!("booleans", bool, get_bool_array_opt, get_bool_array);

    pub fn get_object(&self, path: &str) -> Option<&Document> {
        self.get(path)?.as_object()
    }

    pub fn get_object_mut(&mut self, path: &str) -> Option<&mut Document> {
        self.get_mut(path)?.as_object_mut()
    }

    /// Get the objects of the array at `path`. Any element that is not an
    /// object makes the whole lookup fail.
    pub fn get_array_opt(&self, path: &str) -> Option<Vec<&Document>> {
        self.get(path)?
            .as_array()?
            .iter()
            .map(Value::as_object)
            .collect()
    }

    pub fn get_array(&self, path: &str) -> Vec<&Document> {
        self.get_array_opt(path).unwrap_or_default()
    }

    /// Normalize `value` and store it at `path`, creating missing
    /// intermediate objects.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAnObject`] when an intermediate segment
    /// holds a non-object value. The document is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use json_object::{Document, DocumentError};
    ///
    /// # fn main() -> Result<(), DocumentError> {
    /// let mut doc = Document::new();
    /// doc.put("server.host", "localhost")?.put("server.port", &8080u16)?;
    /// assert_eq!(doc.get_int("server.port"), 8080);
    /// assert!(doc.put("server.host.name", "x").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn put<T: Serialize + ?Sized>(
        &mut self,
        path: &str,
        value: &T,
    ) -> Result<&mut Self, DocumentError> {
        self.put_value(path, normalize(value))
    }

    /// Store an already canonical value at `path` without normalizing it.
    pub fn put_value(
        &mut self,
        path: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self, DocumentError> {
        let value = value.into();
        let (parent, key) = vivify_parent(self, path)?;
        parent.insert(key, value);
        Ok(self)
    }

    /// Remove the value at `path` and return it.
    ///
    /// When the prefix of `path` does not resolve to an object nothing
    /// happens and `None` is returned.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        match resolve_parent_mut(self, path) {
            Some((parent, key)) => parent.remove_key(key),
            None => {
                tracing::debug!(path, "parent is not an object, nothing to remove");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Kind;
    use std::collections::BTreeMap;

    fn sample() -> Document {
        r#"{
            "num": 3.9,
            "neg": -3.9,
            "huge": 1e300,
            "int_str": "-42",
            "float_str": "2.5",
            "bad_str": "abc",
            "overflow_str": "1e400",
            "nan_str": "NaN",
            "flag": true,
            "nothing": null,
            "nums": [1, 2.5, "3"],
            "mixed": [1, true],
            "objs": [{"x": 1}, {"x": 2}],
            "not_all_objs": [{"x": 1}, 2],
            "nested": {"k": "v"}
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_float_coercion() {
        let doc = sample();
        assert_eq!(doc.get_float_opt("num"), Some(3.9));
        assert_eq!(doc.get_float_opt("float_str"), Some(2.5));
        assert_eq!(doc.get_float_opt("int_str"), Some(-42.0));
        assert_eq!(doc.get_float_opt("bad_str"), None);
        assert_eq!(doc.get_float_opt("overflow_str"), None);
        assert_eq!(doc.get_float_opt("nan_str"), None);
        assert_eq!(doc.get_float_or("overflow_str", 2.0), 2.0);
        assert_eq!(doc.get_float_opt("flag"), None);
        assert_eq!(doc.get_float_or("bad_str", 1.5), 1.5);
        assert_eq!(doc.get_float("missing"), 0.0);
    }

    #[test]
    fn test_int_coercion() {
        let doc = sample();
        assert_eq!(doc.get_int_opt("num"), Some(3));
        assert_eq!(doc.get_int_opt("neg"), Some(-3));
        assert_eq!(doc.get_int_opt("huge"), Some(i64::MAX));
        assert_eq!(doc.get_int_opt("int_str"), Some(-42));
        assert_eq!(doc.get_int_opt("float_str"), None);
        assert_eq!(doc.get_int_opt("flag"), None);
        assert_eq!(doc.get_int_or("nothing", 7), 7);
        assert_eq!(doc.get_int("missing"), 0);
    }

    #[test]
    fn test_string_coercion() {
        let doc = sample();
        assert_eq!(doc.get_string_opt("num").as_deref(), Some("3.9"));
        assert_eq!(doc.get_string_opt("bad_str").as_deref(), Some("abc"));
        assert_eq!(doc.get_string_opt("flag"), None);
        assert_eq!(doc.get_string_or("nested", "fallback"), "fallback");
        assert_eq!(doc.get_string("missing"), "");

        let mut doc = Document::new();
        doc.put("one", &1.0).unwrap();
        doc.put("big", &1e21).unwrap();
        doc.put("tenth", &0.1).unwrap();
        assert_eq!(doc.get_string("one"), "1");
        assert_eq!(doc.get_string("big"), "1000000000000000000000");
        assert_eq!(doc.get_string("tenth"), "0.1");
    }

    #[test]
    fn test_bool_coercion() {
        let doc = sample();
        assert_eq!(doc.get_bool_opt("flag"), Some(true));
        assert_eq!(doc.get_bool_opt("num"), None);
        assert_eq!(doc.get_bool_opt("bad_str"), None);
        assert!(doc.get_bool_or("missing", true));
        assert!(!doc.get_bool("missing"));
    }

    #[test]
    fn test_array_coercion_is_atomic() {
        let doc = sample();
        assert_eq!(doc.get_float_array_opt("nums"), Some(vec![1.0, 2.5, 3.0]));
        assert_eq!(
            doc.get_string_array("nums"),
            vec!["1".to_string(), "2.5".to_string(), "3".to_string()]
        );
        // 2.5 truncates, "3" parses
        assert_eq!(doc.get_int_array("nums"), vec![1, 2, 3]);
        assert_eq!(doc.get_bool_array_opt("nums"), None);
        assert_eq!(doc.get_float_array_opt("mixed"), None);
        assert!(doc.get_float_array("mixed").is_empty());
        assert_eq!(doc.get_float_array_opt("num"), None);
    }

    #[test]
    fn test_objects() {
        let doc = sample();
        assert_eq!(doc.get_object("nested").map(Document::len), Some(1));
        assert_eq!(doc.get_object("num"), None);

        let objs = doc.get_array("objs");
        assert_eq!(objs.len(), 2);
        assert_eq!(objs[1].get_int("x"), 2);

        assert_eq!(doc.get_array_opt("not_all_objs"), None);
        assert!(doc.get_array("not_all_objs").is_empty());
        assert!(doc.get_array("missing").is_empty());
    }

    #[test]
    fn test_generic_accessors() {
        let doc = sample();
        assert_eq!(doc.get_as::<Vec<i64>>("nums"), Some(vec![1, 2, 3]));
        assert_eq!(doc.get_or("missing", 9i64), 9);
        assert!(doc.get_or("flag", false));
    }

    #[test]
    fn test_has_counts_null_as_present() {
        let doc = sample();
        assert!(doc.has("nothing"));
        assert!(doc.has("nested.k"));
        assert!(!doc.has("missing"));
        assert!(!doc.has("nothing.deeper"));
    }

    #[test]
    fn test_put_and_get() {
        let mut doc = Document::new();
        doc.put("a.b.c", "deep")
            .unwrap()
            .put("a.n", &Some(5u8))
            .unwrap();

        assert_eq!(doc.get_string("a.b.c"), "deep");
        assert_eq!(doc.get_int("a.n"), 5);
        assert!(doc.get_object("a.b").is_some());
    }

    #[test]
    fn test_put_replaces_final_value() {
        let mut doc = sample();
        doc.put("nested", &vec![1, 2]).unwrap();
        assert_eq!(doc.get_int_array("nested"), vec![1, 2]);

        // Writing through a path that now ends at an array is a conflict
        assert!(doc.put("nested.k", "v").is_err());
    }

    #[test]
    fn test_put_structural_conflict() {
        let mut doc = Document::new();
        doc.put("a", "scalar").unwrap();
        let before = doc.clone();

        let err = doc.put("a.b", &1).unwrap_err();
        assert_eq!(
            err,
            DocumentError::NotAnObject {
                segment: "a".to_string(),
                found: Kind::String
            }
        );
        assert_eq!(doc, before);
    }

    #[test]
    fn test_put_normalizes_host_values() {
        let mut inner = BTreeMap::new();
        inner.insert("count", 2u64);

        let mut doc = Document::new();
        doc.put("m", &inner).unwrap();
        assert_eq!(doc.get_float("m.count"), 2.0);

        doc.put_value("raw", Value::from(vec!["x"])).unwrap();
        assert_eq!(doc.get_string_array("raw"), vec!["x".to_string()]);
    }

    #[test]
    fn test_remove() {
        let mut doc: Document = r#"{"a": {"b": 1, "c": 2}, "s": "x"}"#.parse().unwrap();

        assert_eq!(doc.remove("a.b"), Some(Value::from(1)));
        let expected: Document = r#"{"a": {"c": 2}, "s": "x"}"#.parse().unwrap();
        assert_eq!(doc, expected);

        assert_eq!(doc.remove("s"), Some(Value::from("x")));
        assert!(!doc.has("s"));
    }

    #[test]
    fn test_remove_through_non_object_is_noop() {
        let mut doc: Document = r#"{"a": {"c": 2}, "s": "x", "l": [{"k": 1}]}"#.parse().unwrap();
        let before = doc.clone();

        assert_eq!(doc.remove("missing.path"), None);
        assert_eq!(doc.remove("s.x"), None);
        assert_eq!(doc.remove("l.k"), None);
        assert_eq!(doc.remove("a.missing"), None);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut doc = sample();
        if let Some(Value::String(s)) = doc.get_mut("nested.k") {
            s.push('!');
        }
        assert_eq!(doc.get_string("nested.k"), "v!");

        doc.get_object_mut("nested").unwrap().insert("k2", 1);
        assert_eq!(doc.get_int("nested.k2"), 1);
    }
}
