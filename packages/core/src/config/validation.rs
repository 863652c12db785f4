//! Configuration validation

use super::ValidationConfig;

/// Smallest accepted `max_path_length`, the length of `$`
pub const MIN_PATH_LENGTH: usize = 1;

/// Smallest accepted `max_reported_chars`
pub const MIN_REPORTED_CHARS: usize = 16;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid path length limit: {0}")]
    InvalidLengthLimit(String),

    #[error("Invalid report length: {0}")]
    InvalidReportLength(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any setting is out of range.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for ValidationConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_path_length.is_some_and(|limit| limit < MIN_PATH_LENGTH) {
            return Err(ConfigurationError::InvalidLengthLimit(
                "max_path_length cannot be zero, every path holds at least '$'".to_string(),
            ));
        }

        if self.max_reported_chars < MIN_REPORTED_CHARS {
            return Err(ConfigurationError::InvalidReportLength(format!(
                "max_reported_chars must be at least {MIN_REPORTED_CHARS}, got {}",
                self.max_reported_chars
            )));
        }

        Ok(())
    }
}
