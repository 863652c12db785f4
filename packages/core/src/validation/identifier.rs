//! Member name validation
//!
//! A member name is legal when it is non-empty, starts with an ASCII letter or
//! underscore and continues with ASCII letters, digits or underscores.

use crate::error::{PathError, PathResult};
use crate::tokens::{is_identifier_continue, is_identifier_start};

/// Check whether `key` is a legal member name
#[inline]
#[must_use]
pub fn is_valid_identifier(key: &str) -> bool {
    match key.as_bytes().split_first() {
        Some((first, rest)) => {
            is_identifier_start(*first) && rest.iter().all(|b| is_identifier_continue(*b))
        }
        None => false,
    }
}

/// Validate a member name, returning it unchanged when legal
///
/// # Errors
///
/// Returns `PathError::InvalidIdentifier` if `key` is empty, starts with
/// anything other than a letter or underscore, or contains any character
/// other than letters, digits and underscores.
#[inline]
pub fn validate_identifier(key: &str) -> PathResult<&str> {
    if is_valid_identifier(key) {
        Ok(key)
    } else {
        Err(PathError::invalid_identifier(key))
    }
}

/// Validate a member name that may be absent
///
/// # Errors
///
/// Returns `PathError::MissingKey` for `None`, otherwise the errors of
/// [`validate_identifier`].
#[inline]
pub fn require_key(key: Option<&str>) -> PathResult<&str> {
    key.ok_or(PathError::MissingKey).and_then(validate_identifier)
}
