//! Validation functions for dotted paths.
//!
//! Resolution itself accepts any string; these checks are for callers that
//! take paths from untrusted input and want to bound them up front.

use crate::PathError;

/// Maximum allowed path string length, in bytes.
pub const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed number of segments.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate a path string.
///
/// # Errors
///
/// Returns an error if:
/// - The path exceeds [`MAX_PATH_LENGTH`] bytes
/// - The path has more than [`MAX_PATH_DEPTH`] segments
///
/// # Example
///
/// ```
/// use json_object_path::validate_path_str;
///
/// validate_path_str("a.b.c").unwrap();
/// validate_path_str(&"a.".repeat(300)).unwrap_err();
/// ```
pub fn validate_path_str(path: &str) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong);
    }
    // n separators mean n + 1 segments
    if path.matches(crate::SEPARATOR).count() >= MAX_PATH_DEPTH {
        return Err(PathError::PathTooDeep);
    }
    Ok(())
}
