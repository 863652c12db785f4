//! Core `Path` type and its constructors

use std::borrow::Cow;

use crate::config::ValidationConfig;
use crate::error::{PathError, PathResult};
use crate::scanner::{validate_path, validate_path_reporting};
use crate::tokens::ROOT_MARKER;

/// A validated path into a JSON document
///
/// Two paths are equal exactly when their texts are equal; no normalization
/// is applied, so `$**.a` and `$.**.a` are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    text: Cow<'static, str>,
}

impl Path {
    /// The root path (`$`)
    pub const ROOT: Path = Path {
        text: Cow::Borrowed(ROOT_MARKER),
    };

    /// Create the root path (`$`)
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self::ROOT
    }

    /// Parse and validate a whole path string
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidPathSyntax` if `text` does not follow the
    /// path grammar.
    ///
    /// # Examples
    /// ```
    /// use docpath_core::Path;
    ///
    /// let path = Path::parse("$.user.name").unwrap();
    /// assert_eq!(path.as_str(), "$.user.name");
    /// assert!(Path::parse("$.user..name").is_err());
    /// ```
    #[inline]
    pub fn parse(text: &str) -> PathResult<Self> {
        validate_path(text)?;
        Ok(Self::from_string_unchecked(text))
    }

    /// Parse a path string that may be absent
    ///
    /// # Errors
    ///
    /// Returns `PathError::MissingPath` for `None`, otherwise the errors of
    /// [`Path::parse`].
    #[inline]
    pub fn parse_optional(text: Option<&str>) -> PathResult<Self> {
        text.ok_or(PathError::MissingPath).and_then(Self::parse)
    }

    /// Parse a path string under the limits of `config`
    ///
    /// # Errors
    ///
    /// Returns `PathError::PathTooLong` if `text` exceeds the configured
    /// length limit (checked before scanning), otherwise the errors of
    /// [`Path::parse`] with the offending input truncated to the configured
    /// number of characters.
    ///
    /// `config` is not validated here. A length limit below one byte and a
    /// report length below [`MIN_REPORTED_CHARS`](crate::config::MIN_REPORTED_CHARS)
    /// are raised to those floors; [`ValidationConfig::from_json`] rejects them
    /// outright.
    pub fn parse_with(text: &str, config: &ValidationConfig) -> PathResult<Self> {
        config.check_length(text)?;
        validate_path_reporting(text, config.reported_chars())?;
        Ok(Self::from_string_unchecked(text))
    }

    /// Wrap `text` as a path without validating it
    ///
    /// This is a trust boundary: use it only for text that is already known
    /// to be a valid path, such as the output of another `Path`. Nothing
    /// checks the result, and structural operations on a malformed path only
    /// see the legs before the first malformed byte.
    #[inline]
    #[must_use]
    pub fn from_string_unchecked(text: impl Into<String>) -> Self {
        Self {
            text: Cow::Owned(text.into()),
        }
    }

    /// Get the textual representation
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the path, returning its text
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text.into_owned()
    }

    /// Check if this is the root path (`$`)
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.text == ROOT_MARKER
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::ROOT
    }
}
