//! Immutable path value type
//!
//! A [`Path`] is a validated textual path such as `$.catalog.**.price`. It is
//! created by parsing a whole string, by the explicit unchecked constructor,
//! or by extending an existing path one segment at a time. Extending only
//! validates the new segment: the prefix was accepted when its path was built.

mod combinators;
mod conversions;
mod structure;
mod types;

pub use combinators::{array_element, member, recursive_descent, wildcard};
pub use types::Path;
