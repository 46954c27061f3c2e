//! Key validation
//!
//! A key is a non-empty string of ASCII letters, digits, `.`, `-` and `_`.
//! Dots separate path segments, so a key may not start or end with a dot or
//! contain two dots in a row: every segment must be non-empty. A key has at
//! most [`MAX_PATH_DEPTH`] segments.

use crate::error::{Result, VaultError};

/// Segment separator in key strings
pub const SEPARATOR: char = '.';

/// Deepest nesting a key plus its value may reach below the document root
pub const MAX_PATH_DEPTH: usize = 64;

/// Whether `c` may appear in a key
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

/// Validate a key string
///
/// # Errors
///
/// `KeyInvalid` when the key is empty, contains a character outside the
/// grammar, would produce an empty path segment, or has more than
/// [`MAX_PATH_DEPTH`] segments.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(VaultError::key_invalid(key, "key must not be empty"));
    }

    if let Some((pos, c)) = key.char_indices().find(|(_, c)| !is_key_char(*c)) {
        return Err(VaultError::key_invalid(
            key,
            format!(
                "character {:?} at position {} is not allowed (use letters, digits, '.', '-', '_')",
                c, pos
            ),
        ));
    }

    if key.split(SEPARATOR).any(str::is_empty) {
        return Err(VaultError::key_invalid(
            key,
            "empty path segment (leading, trailing or repeated '.')",
        ));
    }

    let segments = key.split(SEPARATOR).count();
    if segments > MAX_PATH_DEPTH {
        return Err(VaultError::key_invalid(
            key,
            format!(
                "{} path segments; at most {} allowed",
                segments, MAX_PATH_DEPTH
            ),
        ));
    }

    Ok(())
}

/// Whether the key is valid
pub fn is_valid_key(key: &str) -> bool {
    validate_key(key).is_ok()
}
