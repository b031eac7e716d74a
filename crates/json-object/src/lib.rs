//! Dynamically-typed JSON documents.
//!
//! A [`Document`] is a string-keyed map of canonical [`Value`]s addressed by
//! dotted paths. Reads never fail: a missing path or a value of the wrong
//! shape is `None`, or a default. Writes normalize any `serde::Serialize`
//! value into the canonical model and create missing intermediate objects.
//!
//! # Example
//!
//! ```
//! use json_object::Document;
//!
//! let mut doc: Document = r#"{"user": {"name": "ada", "age": "36"}}"#.parse().unwrap();
//!
//! // Typed reads coerce where it makes sense
//! assert_eq!(doc.get_string("user.name"), "ada");
//! assert_eq!(doc.get_int("user.age"), 36);
//! assert_eq!(doc.get_float_or("user.height", 1.7), 1.7);
//!
//! // Writes create intermediate objects
//! doc.put("user.address.city", "London").unwrap();
//! assert!(doc.get_object("user.address").is_some());
//!
//! // Writing through a scalar is an error
//! assert!(doc.put("user.name.first", "x").is_err());
//!
//! doc.remove("user.age");
//! assert_eq!(
//!     doc.to_string(),
//!     r#"{"user":{"address":{"city":"London"},"name":"ada"}}"#
//! );
//! ```
//!
//! A document has no internal locking. Mutating one from several threads
//! needs external synchronization.

pub mod access;
pub mod beautify;
pub mod codec;
pub mod document;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod value;

pub use access::Coerce;
pub use beautify::{Beautifier, Pretty};
pub use codec::{
    decode, decode_array, decode_file, decode_str, encode, encode_indented, encode_with,
    from_serialize, marshal, EncodeOptions,
};
pub use document::Document;
pub use error::{CodecError, DocumentError};
pub use normalize::{normalize, try_normalize, ByteBuf, Bytes, NormalizeError, Normalizer};
pub use resolve::{resolve, resolve_mut, resolve_parent, resolve_parent_mut, vivify_parent};
pub use value::{Kind, Value, MAX_SAFE_INTEGER};

pub use json_object_path as path;
