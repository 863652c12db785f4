//! Core `PathBuilder` structure and base functionality
//!
//! Contains the builder state and the terminal `build()` call. Segment
//! methods live in `segments`.

use docpath_core::{Path, PathError, PathResult};

/// Fluent builder for paths
///
/// Every segment method takes and returns the builder, so a whole path can be
/// written as one expression. Validation happens per segment, but failures
/// are deferred: the first one is recorded, later segments are skipped, and
/// [`PathBuilder::build`] returns it.
///
/// # Examples
/// ```
/// use docpath::PathBuilder;
///
/// let path = PathBuilder::root()
///     .member("catalog")
///     .recursive_descent("price")
///     .build()
///     .unwrap();
/// assert_eq!(path.as_str(), "$.catalog.**.price");
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    /// Text rendered so far, always a valid path while `error` is unset
    pub(crate) text: String,
    /// First segment failure, if any
    pub(crate) error: Option<PathError>,
    /// Number of segments appended successfully
    pub(crate) segments: usize,
}

impl PathBuilder {
    /// Start building from the root (`$`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::from_path(Path::ROOT)
    }

    /// Start building from an existing path
    #[inline]
    #[must_use]
    pub fn from_path(path: Path) -> Self {
        Self {
            text: path.into_string(),
            error: None,
            segments: 0,
        }
    }

    /// Text rendered so far
    ///
    /// After a failure this is the text up to the last valid segment.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check whether a segment has failed
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Finish the chain
    ///
    /// # Errors
    ///
    /// Returns the first segment error recorded by the chain:
    /// `PathError::InvalidIdentifier`, `PathError::InvalidIndex` or
    /// `PathError::MissingKey`.
    pub fn build(self) -> PathResult<Path> {
        if let Some(error) = self.error {
            return Err(error);
        }

        tracing::trace!(
            segments = self.segments,
            length = self.text.len(),
            "path built"
        );
        // Every segment went through the core renderers, starting from a valid path.
        Ok(Path::from_string_unchecked(self.text))
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::root()
    }
}

impl From<Path> for PathBuilder {
    fn from(path: Path) -> Self {
        Self::from_path(path)
    }
}
