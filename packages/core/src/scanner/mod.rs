//! Non-backtracking path scanner
//!
//! A forward-only automaton that walks a candidate path once, byte by byte,
//! and either accepts it or stops at the first byte no leg can start with.
//! It never retries an alternative production, so its cost is linear in the
//! input length and its state is a handful of scalars.
//!
//! # Architecture
//!
//! - `types`: scan states, legs, and rejection records
//! - `engine`: the driver loop and end-of-input handling
//! - `transitions`: per-state byte transitions and leg dispatch
//!
//! # Usage
//!
//! ```rust
//! use docpath_core::scanner::{is_valid_path, validate_path};
//!
//! assert!(is_valid_path("$.store.book[0].**.price"));
//! assert!(!is_valid_path("$.store..book"));
//! assert!(validate_path("$**").is_err());
//! ```

mod engine;
mod transitions;
mod types;

pub use types::Leg;
pub(crate) use types::{LocatedLeg, Rejection};

use engine::Scanner;

use crate::error::{DEFAULT_MAX_REPORTED_CHARS, PathError, PathResult};

/// Check whether `input` is a legal path
///
/// Never fails; suitable for optimistic pre-checks.
#[inline]
#[must_use]
pub fn is_valid_path(input: &str) -> bool {
    Scanner::new(input).run(|_| {}).is_ok()
}

/// Validate `input` against the path grammar
///
/// # Errors
///
/// Returns `PathError::InvalidPathSyntax` with the position and the rule
/// that failed when `input` is not a legal path.
#[inline]
pub fn validate_path(input: &str) -> PathResult<()> {
    validate_path_reporting(input, DEFAULT_MAX_REPORTED_CHARS)
}

/// Validate `input`, echoing at most `max_reported_chars` of it on failure
pub(crate) fn validate_path_reporting(input: &str, max_reported_chars: usize) -> PathResult<()> {
    match Scanner::new(input).run(|_| {}) {
        Ok(()) => {
            tracing::trace!(length = input.len(), "path accepted");
            Ok(())
        }
        Err(rejection) => {
            tracing::trace!(
                length = input.len(),
                position = rejection.position,
                violation = %rejection.violation,
                "path rejected"
            );
            Err(PathError::invalid_syntax(
                input,
                rejection.position,
                rejection.violation,
                max_reported_chars,
            ))
        }
    }
}

/// Collect the legs of `input` in order
///
/// Scanning stops at the first malformed byte; the legs completed before it
/// are returned together with the rejection.
pub(crate) fn located_legs(input: &str) -> (Vec<LocatedLeg<'_>>, Option<Rejection>) {
    let mut legs = Vec::new();
    let outcome = Scanner::new(input).run(|leg| legs.push(leg));
    (legs, outcome.err())
}
