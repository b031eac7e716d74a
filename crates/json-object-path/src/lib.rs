//! Dot-separated key paths.
//!
//! A path such as `user.address.city` addresses a value nested inside string-keyed
//! maps. Each segment between dots is a map key taken literally: there is no
//! escaping, so keys that themselves contain `.` cannot be addressed.
//!
//! # Example
//!
//! ```
//! use json_object_path::{segments, split_last};
//!
//! assert_eq!(segments("user.address.city").count(), 3);
//! assert_eq!(split_last("user.address.city"), (Some("user.address"), "city"));
//! assert_eq!(split_last("user"), (None, "user"));
//! ```

use thiserror::Error;

pub mod validate;
pub use validate::{validate_path_str, MAX_PATH_DEPTH, MAX_PATH_LENGTH};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Iterate over the segments of a path without allocating.
///
/// Always yields at least one segment: the empty string is the path to the
/// empty key.
///
/// # Example
///
/// ```
/// use json_object_path::segments;
///
/// assert_eq!(segments("a.b").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(segments("").collect::<Vec<_>>(), vec![""]);
/// assert_eq!(segments("a..b").collect::<Vec<_>>(), vec!["a", "", "b"]);
/// ```
pub fn segments(path: &str) -> std::str::Split<'_, char> {
    path.split(SEPARATOR)
}

/// Split a path at its last separator into the prefix and the final key.
///
/// The prefix is `None` when the path has a single segment, meaning the key
/// lives directly in the root document.
pub fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some((prefix, key)) => (Some(prefix), key),
        None => (None, path),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is longer than {} bytes", MAX_PATH_LENGTH)]
    PathTooLong,
    #[error("path is deeper than {} segments", MAX_PATH_DEPTH)]
    PathTooDeep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        assert_eq!(segments("a").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(segments("a.b.c").collect::<Vec<_>>(), vec!["a", "b", "c"]);

        // Empty segments are literal empty keys
        assert_eq!(segments(".").collect::<Vec<_>>(), vec!["", ""]);
        assert_eq!(segments("a.").collect::<Vec<_>>(), vec!["a", ""]);
    }

    #[test]
    fn test_split_last() {
        assert_eq!(split_last("a"), (None, "a"));
        assert_eq!(split_last("a.b"), (Some("a"), "b"));
        assert_eq!(split_last("a.b.c"), (Some("a.b"), "c"));
        assert_eq!(split_last("a."), (Some("a"), ""));
        assert_eq!(split_last(""), (None, ""));
    }

    #[test]
    fn test_split_last_agrees_with_segments() {
        for path in ["", "a", "a.b", "a..b", ".a", "a.", "x.y.z"] {
            let steps: Vec<&str> = segments(path).collect();
            let (prefix, key) = split_last(path);
            assert_eq!(Some(&key), steps.last(), "key of {path:?}");
            assert_eq!(prefix.map_or(0, |p| segments(p).count()), steps.len() - 1, "prefix of {path:?}");
        }
    }
}
