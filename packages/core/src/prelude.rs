//! Commonly used types and functions
//!
//! ```rust
//! use docpath_core::prelude::*;
//!
//! let path = member("user").and_then(|p| p.array_element(0)).unwrap();
//! assert!(is_valid_path(path.as_str()));
//! ```

pub use crate::config::ValidationConfig;
pub use crate::error::{ErrorKind, PathError, PathResult};
pub use crate::path::{Path, array_element, member, recursive_descent, wildcard};
pub use crate::scanner::{Leg, is_valid_path, validate_path};
