//! Walking a document along a dotted path.
//!
//! Reads descend through objects one segment at a time. An array ends the
//! walk: it is returned as-is even when segments remain, since arrays are
//! never indexed by path segments. A scalar with segments remaining means the
//! path does not resolve. None of this is an error; a missing path is an
//! ordinary `None`.

use json_object_path::{segments, split_last};

use crate::document::Document;
use crate::error::DocumentError;
use crate::value::Value;

/// Get a value from a document by dotted path.
///
/// # Example
///
/// ```
/// use json_object::{resolve, Document};
///
/// let doc: Document = r#"{"a": {"b": [1, 2, 3]}}"#.parse().unwrap();
/// assert_eq!(resolve(&doc, "a.b"), resolve(&doc, "a.b.c"));
/// assert_eq!(resolve(&doc, "a.x"), None);
/// ```
pub fn resolve<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    let mut steps = segments(path).peekable();
    while let Some(step) = steps.next() {
        let value = current.get_key(step)?;
        if steps.peek().is_none() {
            return Some(value);
        }
        match value {
            Value::Object(next) => current = next,
            Value::Array(_) => return Some(value),
            _ => return None,
        }
    }
    None
}

/// Get a mutable reference to a value in a document by dotted path.
pub fn resolve_mut<'a>(doc: &'a mut Document, path: &str) -> Option<&'a mut Value> {
    let mut current = doc;
    let mut steps = segments(path).peekable();
    while let Some(step) = steps.next() {
        let value = current.get_key_mut(step)?;
        if steps.peek().is_none() {
            return Some(value);
        }
        match value {
            Value::Object(next) => current = next,
            other => return if other.is_array() { Some(other) } else { None },
        }
    }
    None
}

/// Find the object holding the final segment of `path`, and that segment.
///
/// Returns `None` when the prefix does not resolve to an object.
pub fn resolve_parent<'a, 'p>(doc: &'a Document, path: &'p str) -> Option<(&'a Document, &'p str)> {
    match split_last(path) {
        (None, key) => Some((doc, key)),
        (Some(prefix), key) => resolve(doc, prefix)?.as_object().map(|parent| (parent, key)),
    }
}

pub fn resolve_parent_mut<'a, 'p>(
    doc: &'a mut Document,
    path: &'p str,
) -> Option<(&'a mut Document, &'p str)> {
    match split_last(path) {
        (None, key) => Some((doc, key)),
        (Some(prefix), key) => resolve_mut(doc, prefix)?
            .as_object_mut()
            .map(|parent| (parent, key)),
    }
}

/// Find the object that should hold the final segment of `path`, creating
/// empty objects for missing intermediate segments.
///
/// # Errors
///
/// Returns [`DocumentError::NotAnObject`] when an intermediate segment exists
/// but holds anything other than an object, `Null` included. Objects are only
/// created past the last existing segment, so on error the document is
/// unchanged.
pub fn vivify_parent<'a, 'p>(
    doc: &'a mut Document,
    path: &'p str,
) -> Result<(&'a mut Document, &'p str), DocumentError> {
    let (prefix, key) = split_last(path);
    let mut current = doc;
    for step in prefix.into_iter().flat_map(segments) {
        let slot = current
            .as_map_mut()
            .entry(step.to_string())
            .or_insert_with(|| {
                tracing::debug!(segment = step, "creating intermediate object");
                Value::Object(Document::new())
            });
        match slot {
            Value::Object(next) => current = next,
            other => {
                return Err(DocumentError::NotAnObject {
                    segment: step.to_string(),
                    found: other.kind(),
                })
            }
        }
    }
    Ok((current, key))
}
