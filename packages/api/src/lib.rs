//! Document Path Public API
//!
//! Validated paths into JSON documents with a fluent builder. Paths are plain
//! immutable values; every way of producing one goes through the same
//! identifier and index rules, and whole strings are checked by a linear-time
//! scanner that cannot be driven into catastrophic backtracking.
//!
//! ```rust
//! use docpath::DocPath;
//!
//! let path = DocPath::root()
//!     .member("orders")
//!     .array_element(0)
//!     .member("total")
//!     .build()
//!     .unwrap();
//! assert_eq!(path.as_str(), "$.orders[0].total");
//! assert!(DocPath::is_valid(path.as_str()));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::PathBuilder;

// Re-export the core types
pub use docpath_core::config::{ConfigurationError, Validator};
pub use docpath_core::path::{array_element, member, recursive_descent, wildcard};
pub use docpath_core::{
    ErrorKind, Leg, Path, PathError, PathResult, SyntaxViolation, ValidationConfig,
    is_valid_identifier, is_valid_path, validate_path,
};

/// Main entry point providing static path methods
pub struct DocPath;

impl DocPath {
    /// Start a fluent builder at the root
    ///
    /// Shorthand for `PathBuilder::root()`
    #[must_use]
    pub fn root() -> PathBuilder {
        PathBuilder::root()
    }

    /// Start a fluent builder from an existing path
    #[must_use]
    pub fn from_path(path: Path) -> PathBuilder {
        PathBuilder::from_path(path)
    }

    /// Parse and validate a whole path string
    ///
    /// # Errors
    ///
    /// Returns `PathError::InvalidPathSyntax` if `text` is not a legal path.
    pub fn parse(text: &str) -> PathResult<Path> {
        Path::parse(text)
    }

    /// Parse a path string under the limits of `config`
    ///
    /// # Errors
    ///
    /// Returns `PathError::PathTooLong` or `PathError::InvalidPathSyntax`.
    pub fn parse_with(text: &str, config: &ValidationConfig) -> PathResult<Path> {
        Path::parse_with(text, config)
    }

    /// Check whether `text` is a legal path
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        is_valid_path(text)
    }
}

/// Start a fluent builder at the root
///
/// Shorthand for `PathBuilder::root()`
#[must_use]
pub fn builder() -> PathBuilder {
    PathBuilder::root()
}
