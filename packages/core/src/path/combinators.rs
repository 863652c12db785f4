//! Segment-append combinators
//!
//! Each combinator validates only the segment it appends and copies the
//! trusted prefix verbatim. The consuming `into_*` forms reuse the path's
//! buffer, so a long chain of them costs the length of the final text.

use super::types::Path;
use crate::error::PathResult;
use crate::validation::{push_array_element, push_member, push_recursive_descent, push_wildcard};

impl Path {
    /// Extend with a member leg (`.key`)
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
    #[inline]
    pub fn member(&self, key: &str) -> PathResult<Path> {
        let mut text = self.buffer_with_room(key.len() + 1);
        push_member(&mut text, key)?;
        Ok(Path::from_string_unchecked(text))
    }

    /// Extend with an array index leg (`[index]`)
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidIndex` if `index` is negative.
    #[inline]
    pub fn array_element(&self, index: i64) -> PathResult<Path> {
        let mut text = self.buffer_with_room(22);
        push_array_element(&mut text, index)?;
        Ok(Path::from_string_unchecked(text))
    }

    /// Extend with an index wildcard leg (`[*]`)
    ///
    /// Always appends, whatever the path currently ends with.
    #[inline]
    #[must_use]
    pub fn wildcard(&self) -> Path {
        let mut text = self.buffer_with_room(3);
        push_wildcard(&mut text);
        Path::from_string_unchecked(text)
    }

    /// Extend with a recursive descent to member `key` (`.**.key`)
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
    #[inline]
    pub fn recursive_descent(&self, key: &str) -> PathResult<Path> {
        let mut text = self.buffer_with_room(key.len() + 4);
        push_recursive_descent(&mut text, key)?;
        Ok(Path::from_string_unchecked(text))
    }

    /// Consuming form of [`Path::member`]
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
    #[inline]
    pub fn into_member(self, key: &str) -> PathResult<Path> {
        let mut text = self.into_string();
        push_member(&mut text, key)?;
        Ok(Path::from_string_unchecked(text))
    }

    /// Consuming form of [`Path::array_element`]
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidIndex` if `index` is negative.
    #[inline]
    pub fn into_array_element(self, index: i64) -> PathResult<Path> {
        let mut text = self.into_string();
        push_array_element(&mut text, index)?;
        Ok(Path::from_string_unchecked(text))
    }

    /// Consuming form of [`Path::wildcard`]
    #[inline]
    #[must_use]
    pub fn into_wildcard(self) -> Path {
        let mut text = self.into_string();
        push_wildcard(&mut text);
        Path::from_string_unchecked(text)
    }

    /// Consuming form of [`Path::recursive_descent`]
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
    #[inline]
    pub fn into_recursive_descent(self, key: &str) -> PathResult<Path> {
        let mut text = self.into_string();
        push_recursive_descent(&mut text, key)?;
        Ok(Path::from_string_unchecked(text))
    }

    fn buffer_with_room(&self, extra: usize) -> String {
        let mut text = String::with_capacity(self.as_str().len() + extra);
        text.push_str(self.as_str());
        text
    }
}

/// Create a path selecting member `key` of the root
///
/// # Errors
///
/// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
///
/// # Examples
/// ```
/// let path = docpath_core::path::member("user").unwrap();
/// assert_eq!(path.as_str(), "$.user");
/// ```
#[inline]
pub fn member(key: &str) -> PathResult<Path> {
    Path::ROOT.member(key)
}

/// Create a path selecting element `index` of the root array
///
/// # Errors
///
/// Returns `PathError::InvalidIndex` if `index` is negative.
#[inline]
pub fn array_element(index: i64) -> PathResult<Path> {
    Path::ROOT.array_element(index)
}

/// Create a path selecting every element of the root array (`$[*]`)
#[inline]
#[must_use]
pub fn wildcard() -> Path {
    Path::ROOT.wildcard()
}

/// Create a path searching the whole document for member `key` (`$.**.key`)
///
/// # Errors
///
/// Returns `PathError::InvalidIdentifier` if `key` is not a legal member name.
#[inline]
pub fn recursive_descent(key: &str) -> PathResult<Path> {
    Path::ROOT.recursive_descent(key)
}
