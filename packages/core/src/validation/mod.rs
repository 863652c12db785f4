//! Segment validators and renderers
//!
//! Micro-validators for the two pieces of caller input that end up inside a
//! path (member names and array indices) and the renderers that append a
//! validated segment to a path buffer. Combinators never re-scan the prefix
//! they extend; they only run these checks on the new segment.

pub mod identifier;
pub mod index;
pub mod render;

pub use identifier::{is_valid_identifier, require_key, validate_identifier};
pub use index::validate_index;
pub use render::{
    push_array_element, push_member, push_path, push_recursive_descent, push_wildcard,
};
