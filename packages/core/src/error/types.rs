//! Path Error Types
//!
//! Core error types for path parsing, segment validation and construction.

use std::fmt;

/// Classification of path errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required argument was absent
    Missing,
    /// A whole path string failed the grammar
    Syntax,
    /// A member name segment was not a legal identifier
    Identifier,
    /// An array index was negative
    Index,
    /// Input exceeded a configured limit
    Limit,
}

/// Main path error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// No path text was supplied
    #[error("path must not be null")]
    MissingPath,

    /// No member key was supplied
    #[error("key must not be null")]
    MissingKey,

    /// The path text does not follow the grammar
    #[error("invalid path syntax at position {position}: {violation} (input: '{input}')")]
    InvalidPathSyntax {
        /// Offending input, truncated when very long
        input: String,
        /// Byte offset where the scanner stopped
        position: usize,
        /// Rule that was broken
        violation: SyntaxViolation,
    },

    /// A member name is not a legal identifier
    #[error(
        "invalid identifier '{identifier}': must start with a letter or underscore \
         and contain only alphanumeric characters or underscores"
    )]
    InvalidIdentifier {
        /// Offending name, truncated when very long
        identifier: String,
    },

    /// An array index was negative
    #[error("invalid array index {index}: index must be non-negative")]
    InvalidIndex {
        /// Offending index
        index: i64,
    },

    /// The path text is longer than the configured limit
    #[error("path of {length} bytes exceeds the configured limit of {limit} bytes")]
    PathTooLong {
        /// Length of the rejected input in bytes
        length: usize,
        /// Configured maximum length in bytes
        limit: usize,
    },
}

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

impl PathError {
    /// Get the classification of this error
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::MissingPath | PathError::MissingKey => ErrorKind::Missing,
            PathError::InvalidPathSyntax { .. } => ErrorKind::Syntax,
            PathError::InvalidIdentifier { .. } => ErrorKind::Identifier,
            PathError::InvalidIndex { .. } => ErrorKind::Index,
            PathError::PathTooLong { .. } => ErrorKind::Limit,
        }
    }
}

/// Grammar rule broken by a rejected path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxViolation {
    /// Input does not begin with the root marker
    MissingRoot,
    /// Character that starts no leg
    UnexpectedCharacter(char),
    /// Separator followed by another separator or end of input
    EmptyIdentifier,
    /// Member name starting with a character other than a letter or underscore
    InvalidIdentifierStart(char),
    /// `[]` with nothing inside
    EmptyIndex,
    /// Index carrying a sign
    SignedIndex,
    /// Non-digit inside an index
    InvalidIndexCharacter(char),
    /// End of input inside brackets
    UnterminatedBracket,
    /// Single `*` not preceded by a separator
    LoneAsterisk,
    /// `**` with no leg after it
    DanglingRecursiveDescent,
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxViolation::MissingRoot => write!(f, "path must start with '$'"),
            SyntaxViolation::UnexpectedCharacter(c) => write!(f, "unexpected character '{c}'"),
            SyntaxViolation::EmptyIdentifier => write!(f, "member name must not be empty"),
            SyntaxViolation::InvalidIdentifierStart(c) => {
                write!(f, "member name cannot start with '{c}'")
            }
            SyntaxViolation::EmptyIndex => write!(f, "array index must not be empty"),
            SyntaxViolation::SignedIndex => write!(f, "array index must not carry a sign"),
            SyntaxViolation::InvalidIndexCharacter(c) => {
                write!(f, "array index cannot contain '{c}'")
            }
            SyntaxViolation::UnterminatedBracket => write!(f, "unterminated bracket"),
            SyntaxViolation::LoneAsterisk => {
                write!(f, "wildcard must follow '.' or appear inside brackets")
            }
            SyntaxViolation::DanglingRecursiveDescent => {
                write!(f, "recursive descent must be followed by another leg")
            }
        }
    }
}
