//! # Document Path Core
//!
//! Grammar, validator and value type for the restricted path language used to
//! address elements inside a JSON document: object members, array elements,
//! both wildcard forms, and recursive descent.
//!
//! ## Features
//!
//! - **Linear-time validation** by a forward-only automaton with no
//!   backtracking, so adversarial input cannot trigger catastrophic scans
//! - **Immutable `Path` values** that are equal exactly when their text is
//! - **Segment combinators** that validate only what they append
//! - **Typed errors** for every kind of malformed input
//!
//! ## Grammar
//!
//! ```text
//! path           ::= '$' leg*
//! leg            ::= member | wildcardMember | index | wildcardIndex | doubleAsterisk
//! member         ::= '.' identifier
//! wildcardMember ::= '.' '*'
//! index          ::= '[' digits ']'
//! wildcardIndex  ::= '[' '*' ']'
//! doubleAsterisk ::= ['.'] '**'        (must be followed by another leg)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use docpath_core::Path;
//!
//! let price = Path::ROOT
//!     .member("catalog")
//!     .and_then(|p| p.recursive_descent("price"))
//!     .unwrap();
//! assert_eq!(price.as_str(), "$.catalog.**.price");
//! assert_eq!(Path::parse(price.as_str()).unwrap(), price);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod path;
pub mod prelude;
pub mod scanner;
pub mod tokens;
pub mod validation;

pub use config::{ConfigurationError, ValidationConfig};
pub use error::{ErrorKind, PathError, PathResult, SyntaxViolation};
pub use path::Path;
pub use scanner::{Leg, is_valid_path, validate_path};
pub use validation::{is_valid_identifier, require_key, validate_identifier, validate_index};
