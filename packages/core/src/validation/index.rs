//! Array index validation

use crate::error::{PathError, PathResult};

/// Validate an array index
///
/// Only the sign is constrained; every non-negative `i64` is accepted.
///
/// # Errors
///
/// Returns `PathError::InvalidIndex` carrying `index` when it is negative.
#[inline]
pub fn validate_index(index: i64) -> PathResult<u64> {
    u64::try_from(index).map_err(|_| PathError::invalid_index(index))
}
