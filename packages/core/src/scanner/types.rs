//! Scanner types and data structures

use crate::error::SyntaxViolation;

/// Current state of the path scan
///
/// Each variant records how much of the current leg has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Nothing consumed yet; only the root marker is acceptable
    ExpectRoot,
    /// Between legs
    LegBoundary,
    /// Consumed `.`
    AfterDot,
    /// Consumed `.*`; a further `*` makes it recursive descent
    DotStar,
    /// Consumed a `*` with no separator in front; needs a second `*`
    BareStar,
    /// Inside a member name
    InIdentifier,
    /// Consumed `[`
    AfterBracket,
    /// Inside the digits of an index
    InDigits,
    /// Consumed `[*`
    BracketStar,
}

/// Kind of leg being completed, before its text is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LegKind {
    Member,
    WildcardMember,
    Index,
    WildcardIndex,
    RecursiveDescent,
}

/// One leg of a path, borrowing from the path text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leg<'a> {
    /// Member access (`.name`), holding the name
    Member(&'a str),
    /// Member wildcard (`.*`)
    WildcardMember,
    /// Array element (`[12]`), holding the digits as written
    Index(&'a str),
    /// Index wildcard (`[*]`)
    WildcardIndex,
    /// Recursive descent (`**` or `.**`)
    RecursiveDescent,
}

impl Leg<'_> {
    /// Numeric value of an index leg
    ///
    /// Returns `None` for other legs and for indices too large for `u64`.
    #[inline]
    #[must_use]
    pub fn index_value(&self) -> Option<u64> {
        match self {
            Leg::Index(digits) => digits.parse().ok(),
            _ => None,
        }
    }

    /// Check whether this leg is recursive descent
    #[inline]
    #[must_use]
    pub fn is_recursive_descent(&self) -> bool {
        matches!(self, Leg::RecursiveDescent)
    }
}

/// Leg together with its byte span in the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocatedLeg<'a> {
    pub leg: Leg<'a>,
    pub start: usize,
    pub end: usize,
}

/// Where and why a scan stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub position: usize,
    pub violation: SyntaxViolation,
}
