//! Path error handling module
//!
//! Error types, their classification, and the constructors used by the
//! validators and the scanner when reporting malformed input.

pub mod constructors;
mod types;

pub use constructors::{DEFAULT_MAX_REPORTED_CHARS, truncate_for_report};
pub use types::{ErrorKind, PathError, PathResult, SyntaxViolation};
