//! Conversion between documents and JSON text.
//!
//! Decoding trims surrounding whitespace and parses strictly: malformed input
//! is always a [`CodecError`], never a partial document. Encoding a document
//! cannot fail and never escapes `<`, `>` or `&`.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::document::Document;
use crate::error::CodecError;
use crate::normalize::try_normalize;
use crate::value::Value;

const WHITESPACE: &[u8] = b"\r\n\t ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent with two spaces and put every entry on its own line.
    pub pretty: bool,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

/// Encode a document as compact JSON.
///
/// # Example
///
/// ```
/// use json_object::{encode, Document};
///
/// assert_eq!(encode(&Document::new()), b"{}");
/// ```
pub fn encode(doc: &Document) -> Vec<u8> {
    encode_with(doc, EncodeOptions::default())
}

/// Encode a document as JSON indented by two spaces.
pub fn encode_indented(doc: &Document) -> Vec<u8> {
    encode_with(doc, EncodeOptions::pretty())
}

pub fn encode_with(doc: &Document, options: EncodeOptions) -> Vec<u8> {
    to_json_string(doc, options.pretty).into_bytes()
}

pub(crate) fn to_json_string<T: Serialize + ?Sized>(value: &T, pretty: bool) -> String {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match result {
        Ok(s) => s,
        Err(err) => {
            // Canonical values only have string keys and finite numbers
            tracing::error!(error = %err, "failed to encode canonical value");
            String::new()
        }
    }
}

fn trim(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if !WHITESPACE.contains(first) {
            break;
        }
        bytes = rest;
    }
    while let [rest @ .., last] = bytes {
        if !WHITESPACE.contains(last) {
            break;
        }
        bytes = rest;
    }
    bytes
}

/// Decode a JSON object.
///
/// # Errors
///
/// Returns [`CodecError::Json`] when the input is not valid JSON or its top
/// level is anything other than an object. That includes `null`, which some
/// JSON object libraries decode as an empty document.
pub fn decode(bytes: &[u8]) -> Result<Document, CodecError> {
    let bytes = trim(bytes);
    tracing::trace!(len = bytes.len(), "decoding document");
    Ok(serde_json::from_slice(bytes)?)
}

pub fn decode_str(s: &str) -> Result<Document, CodecError> {
    decode(s.as_bytes())
}

/// Decode a top-level JSON array of objects.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for malformed input and
/// [`CodecError::NotAnArrayOfObjects`] when the input is valid JSON but not
/// an array whose elements are all objects.
///
/// # Example
///
/// ```
/// use json_object::decode_array;
///
/// let docs = decode_array(br#"[{"x": 1}, {"x": 2}]"#).unwrap();
/// assert_eq!(docs[1].get_int("x"), 2);
/// ```
pub fn decode_array(bytes: &[u8]) -> Result<Vec<Document>, CodecError> {
    let body = trim(bytes);
    tracing::trace!(len = body.len(), "decoding array of documents");
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(doc) => Ok(doc),
                _ => Err(CodecError::NotAnArrayOfObjects),
            })
            .collect(),
        _ => Err(CodecError::NotAnArrayOfObjects),
    }
}

/// Read a file and decode it as a JSON object.
///
/// # Errors
///
/// Returns [`CodecError::Io`] when the file cannot be read, otherwise the
/// errors of [`decode`].
pub fn decode_file(path: impl AsRef<Path>) -> Result<Document, CodecError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes)
}

/// Normalize a host value that must be a mapping into a document.
///
/// # Errors
///
/// Returns [`CodecError::Normalize`] when some subtree cannot be normalized
/// and [`CodecError::NotAnObject`] when the value is not a mapping.
///
/// # Example
///
/// ```
/// use json_object::from_serialize;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Config {
///     name: &'static str,
///     retries: u8,
/// }
///
/// let doc = from_serialize(&Config { name: "svc", retries: 3 }).unwrap();
/// assert_eq!(doc.get_int("retries"), 3);
/// assert!(from_serialize(&[1, 2]).is_err());
/// ```
pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Document, CodecError> {
    match try_normalize(value)? {
        Value::Object(doc) => Ok(doc),
        other => Err(CodecError::NotAnObject {
            found: other.kind(),
        }),
    }
}

/// Normalize any host value and encode it as compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::Normalize`] when some subtree cannot be normalized.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let value = try_normalize(value)?;
    Ok(serde_json::to_vec(&value)?)
}

impl Document {
    pub fn parse(bytes: &[u8]) -> Result<Self, CodecError> {
        decode(bytes)
    }

    pub fn parse_str(s: &str) -> Result<Self, CodecError> {
        decode_str(s)
    }

    pub fn parse_array(bytes: &[u8]) -> Result<Vec<Self>, CodecError> {
        decode_array(bytes)
    }

    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        decode_file(path)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode(self)
    }

    pub fn to_formatted_bytes(&self) -> Vec<u8> {
        encode_indented(self)
    }

    pub fn to_formatted_string(&self) -> String {
        to_json_string(self, true)
    }
}

impl FromStr for Document {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_str(s)
    }
}
