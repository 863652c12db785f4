//! Error constructor functions
//!
//! Factory methods that attach the offending input to an error, truncating it
//! so a hostile multi-megabyte path cannot blow up log lines.

use super::types::{PathError, SyntaxViolation};

/// Number of characters of offending input echoed in error messages
pub const DEFAULT_MAX_REPORTED_CHARS: usize = 128;

/// Shorten `input` to at most `max_chars` characters for diagnostics
///
/// Inputs that fit are returned unchanged. Longer inputs keep their first
/// `max_chars` characters followed by a marker carrying the full byte length.
#[must_use]
pub fn truncate_for_report(input: &str, max_chars: usize) -> String {
    match input.char_indices().nth(max_chars) {
        None => input.to_string(),
        Some((cut, _)) => format!("{}... ({} bytes total)", &input[..cut], input.len()),
    }
}

impl PathError {
    /// Creates a syntax error for a rejected path
    ///
    /// # Examples
    /// ```
    /// use docpath_core::error::{PathError, SyntaxViolation};
    ///
    /// let error = PathError::invalid_syntax("$.a..b", 3, SyntaxViolation::EmptyIdentifier, 128);
    /// assert!(error.to_string().contains("position 3"));
    /// ```
    #[must_use]
    pub fn invalid_syntax(
        input: &str,
        position: usize,
        violation: SyntaxViolation,
        max_reported_chars: usize,
    ) -> Self {
        PathError::InvalidPathSyntax {
            input: truncate_for_report(input, max_reported_chars),
            position,
            violation,
        }
    }

    /// Creates an invalid identifier error
    #[must_use]
    pub fn invalid_identifier(identifier: &str) -> Self {
        PathError::InvalidIdentifier {
            identifier: truncate_for_report(identifier, DEFAULT_MAX_REPORTED_CHARS),
        }
    }

    /// Creates an invalid index error
    #[inline]
    #[must_use]
    pub fn invalid_index(index: i64) -> Self {
        PathError::InvalidIndex { index }
    }

    /// Creates a length limit error
    #[inline]
    #[must_use]
    pub fn path_too_long(length: usize, limit: usize) -> Self {
        PathError::PathTooLong { length, limit }
    }
}
