//! Segment rendering
//!
//! Appends one validated leg to a path buffer. The buffer is left untouched
//! when validation fails, so a caller holding a trusted prefix keeps it.

use super::identifier::validate_identifier;
use super::index::validate_index;
use crate::error::PathResult;
use crate::tokens::{
    INDEX_CLOSE, INDEX_OPEN, MEMBER_SEPARATOR, RECURSIVE_DESCENT_SEGMENT, ROOT_MARKER, WILDCARD,
    WILDCARD_INDEX,
};

/// Append a member leg (`.key`)
///
/// # Errors
///
/// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
#[inline]
pub fn push_member(buffer: &mut String, key: &str) -> PathResult<()> {
    let key = validate_identifier(key)?;
    buffer.reserve(key.len() + 1);
    buffer.push(MEMBER_SEPARATOR);
    buffer.push_str(key);
    Ok(())
}

/// Append an index leg (`[index]`)
///
/// # Errors
///
/// Returns `PathError::InvalidIndex` if `index` is negative.
#[inline]
pub fn push_array_element(buffer: &mut String, index: i64) -> PathResult<()> {
    let index = validate_index(index)?;
    buffer.push(INDEX_OPEN);
    buffer.push_str(&index.to_string());
    buffer.push(INDEX_CLOSE);
    Ok(())
}

/// Append an index wildcard leg (`[*]`)
#[inline]
pub fn push_wildcard(buffer: &mut String) {
    buffer.push_str(WILDCARD_INDEX);
}

/// Append a recursive descent leg followed by a member leg (`.**.key`)
///
/// # Errors
///
/// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
#[inline]
pub fn push_recursive_descent(buffer: &mut String, key: &str) -> PathResult<()> {
    let key = validate_identifier(key)?;
    buffer.reserve(RECURSIVE_DESCENT_SEGMENT.len() + key.len() + 1);
    buffer.push_str(RECURSIVE_DESCENT_SEGMENT);
    buffer.push(MEMBER_SEPARATOR);
    buffer.push_str(key);
    Ok(())
}

/// Append every leg of an already validated path (`$` is dropped)
///
/// A dotless recursive descent at the start of `path` is rendered as `.**`,
/// so the result never depends on what `buffer` ends with. Appending `$**.b`
/// to `$.*` gives `$.*.**.b`, not the unparseable `$.***.b`.
#[inline]
pub fn push_path(buffer: &mut String, path: &str) {
    let tail = path.strip_prefix(ROOT_MARKER).unwrap_or(path);
    buffer.reserve(tail.len() + 1);
    if tail.starts_with(WILDCARD) {
        buffer.push(MEMBER_SEPARATOR);
    }
    buffer.push_str(tail);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;

    #[test]
    fn renders_each_segment_form() {
        let mut buffer = String::from("$");
        push_member(&mut buffer, "catalog").expect("valid member");
        push_array_element(&mut buffer, 3).expect("valid index");
        push_wildcard(&mut buffer);
        push_recursive_descent(&mut buffer, "price").expect("valid member");
        assert_eq!(buffer, "$.catalog[3][*].**.price");
    }

    #[test]
    fn failed_segment_leaves_buffer_untouched() {
        let mut buffer = String::from("$.a");
        assert!(matches!(
            push_member(&mut buffer, "1x"),
            Err(PathError::InvalidIdentifier { .. })
        ));
        assert_eq!(
            push_array_element(&mut buffer, -7),
            Err(PathError::InvalidIndex { index: -7 })
        );
        assert!(push_recursive_descent(&mut buffer, "").is_err());
        assert_eq!(buffer, "$.a");
    }

    #[test]
    fn largest_index_is_rendered_in_full() {
        let mut buffer = String::from("$");
        push_array_element(&mut buffer, i64::MAX).expect("max index");
        assert_eq!(buffer, format!("$[{}]", i64::MAX));
    }

    #[test]
    fn appended_path_keeps_its_legs_apart() {
        let mut buffer = String::from("$.*");
        push_path(&mut buffer, "$**.b");
        assert_eq!(buffer, "$.*.**.b");

        let mut buffer = String::from("$.a");
        push_path(&mut buffer, "$[0].b");
        push_path(&mut buffer, "$");
        assert_eq!(buffer, "$.a[0].b");
    }
}
