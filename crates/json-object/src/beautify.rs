//! Human-readable rendering.

use std::fmt;

use serde::Serialize;

use crate::codec::to_json_string;
use crate::document::Document;
use crate::value::Value;

/// Indented JSON output for logs and terminals.
pub trait Beautifier {
    fn beautified_string(&self) -> String;

    fn beautified_bytes(&self) -> Vec<u8> {
        self.beautified_string().into_bytes()
    }
}

impl Beautifier for Document {
    fn beautified_string(&self) -> String {
        to_json_string(self, true)
    }
}

impl Beautifier for Value {
    fn beautified_string(&self) -> String {
        to_json_string(self, true)
    }
}

/// Displays the wrapped value as indented JSON.
///
/// ```
/// use json_object::{Document, Pretty};
///
/// let doc: Document = r#"{"a": 1}"#.parse().unwrap();
/// assert_eq!(format!("{}", Pretty(&doc)), "{\n  \"a\": 1\n}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pretty<'a, T: ?Sized = Document>(pub &'a T);

impl<T: Serialize + ?Sized> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string_pretty(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beautified_document() {
        let doc: Document = r#"{"b": [true], "a": "<x>"}"#.parse().unwrap();
        let expected = "{\n  \"a\": \"<x>\",\n  \"b\": [\n    true\n  ]\n}";
        assert_eq!(doc.beautified_string(), expected);
        assert_eq!(doc.beautified_bytes(), expected.as_bytes());
        assert_eq!(Pretty(&doc).to_string(), expected);
    }

    #[test]
    fn test_beautified_value() {
        assert_eq!(Value::from(2.0).beautified_string(), "2");
        assert_eq!(Value::Null.beautified_string(), "null");
        assert_eq!(
            Pretty(&Value::from(vec![1, 2])).to_string(),
            "[\n  1,\n  2\n]"
        );
    }
}
