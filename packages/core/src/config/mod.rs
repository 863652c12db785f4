//! Validation Configuration
//!
//! Limits applied by [`Path::parse_with`](crate::Path::parse_with). The
//! defaults impose no length cap: plain parsing is linear in the input, and
//! callers accepting untrusted text choose their own bound.

pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{
    ConfigResult, ConfigurationError, MIN_PATH_LENGTH, MIN_REPORTED_CHARS, Validator,
};

use crate::error::{DEFAULT_MAX_REPORTED_CHARS, PathError, PathResult};

/// Limits for validating untrusted path text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Longest accepted input in bytes, `None` for no limit
    pub max_path_length: Option<usize>,
    /// Characters of offending input echoed in error messages
    pub max_reported_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_path_length: None,
            max_reported_chars: DEFAULT_MAX_REPORTED_CHARS,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration with default limits
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs longer than `limit` bytes
    ///
    /// A limit of zero is raised to one byte so that `$` stays valid.
    #[inline]
    #[must_use]
    pub fn with_max_path_length(mut self, limit: usize) -> Self {
        self.max_path_length = Some(limit.max(MIN_PATH_LENGTH));
        self
    }

    /// Echo at most `chars` characters of offending input
    ///
    /// Values below [`MIN_REPORTED_CHARS`] are raised to it.
    #[inline]
    #[must_use]
    pub fn with_max_reported_chars(mut self, chars: usize) -> Self {
        self.max_reported_chars = chars.max(MIN_REPORTED_CHARS);
        self
    }

    /// Load and validate a configuration from JSON
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` if `json` is malformed or has
    /// unknown fields, or any error from [`Validator::validate`].
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            max_path_length = ?config.max_path_length,
            max_reported_chars = config.max_reported_chars,
            "loaded path validation config"
        );
        Ok(config)
    }

    /// Apply the length limit to `input`
    ///
    /// Fields set directly are not validated, so the same floors as the
    /// builder methods apply here.
    pub(crate) fn check_length(&self, input: &str) -> PathResult<()> {
        match self.max_path_length.map(|limit| limit.max(MIN_PATH_LENGTH)) {
            Some(limit) if input.len() > limit => Err(PathError::path_too_long(input.len(), limit)),
            _ => Ok(()),
        }
    }

    /// Characters of input echoed in a syntax error
    pub(crate) fn reported_chars(&self) -> usize {
        self.max_reported_chars.max(MIN_REPORTED_CHARS)
    }
}
