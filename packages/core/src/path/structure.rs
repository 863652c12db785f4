//! Path structure and relationships
//!
//! Every operation here reads the legs reported by the scanner; there is no
//! second grammar for walking a path.

use super::types::Path;
use crate::scanner::{Leg, LocatedLeg, located_legs};
use crate::validation::push_path;

impl Path {
    /// Get the legs of this path in order
    ///
    /// # Examples
    /// ```
    /// use docpath_core::{Leg, Path};
    ///
    /// let path = Path::parse("$.items[0]").unwrap();
    /// assert_eq!(path.legs(), vec![Leg::Member("items"), Leg::Index("0")]);
    /// ```
    #[must_use]
    pub fn legs(&self) -> Vec<Leg<'_>> {
        self.located_legs().into_iter().map(|located| located.leg).collect()
    }

    /// Get the number of legs after the root
    #[must_use]
    pub fn depth(&self) -> usize {
        self.located_legs().len()
    }

    /// Get the parent path
    ///
    /// Drops the last leg, together with any recursive descent legs directly
    /// in front of it, since those may not end a path. Returns `None` for the
    /// root.
    #[must_use]
    pub fn parent(&self) -> Option<Path> {
        let legs = self.located_legs();
        let (last, earlier) = legs.split_last()?;

        let mut cut = last.start;
        for located in earlier.iter().rev() {
            if located.leg.is_recursive_descent() && located.end == cut {
                cut = located.start;
            } else {
                break;
            }
        }

        Some(Path::from_string_unchecked(&self.as_str()[..cut]))
    }

    /// Check if this path extends `ancestor` by at least one leg
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &Path) -> bool {
        let own = self.legs();
        let theirs = ancestor.legs();
        own.len() > theirs.len() && own[..theirs.len()] == theirs[..]
    }

    /// Check if `descendant` extends this path by at least one leg
    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &Path) -> bool {
        descendant.is_descendant_of(self)
    }

    /// Append the legs of `other` to this path
    ///
    /// Nothing is re-scanned. A dotless `**` at the start of `other` is
    /// written as `.**`, which keeps it from merging with a trailing `.*`.
    ///
    /// # Examples
    /// ```
    /// use docpath_core::Path;
    ///
    /// let base = Path::parse("$.store").unwrap();
    /// let rest = Path::parse("$.book[0]").unwrap();
    /// assert_eq!(base.join(&rest).as_str(), "$.store.book[0]");
    /// ```
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut text = String::with_capacity(self.as_str().len() + other.as_str().len() + 1);
        text.push_str(self.as_str());
        push_path(&mut text, other.as_str());
        Path::from_string_unchecked(text)
    }

    fn located_legs(&self) -> Vec<LocatedLeg<'_>> {
        located_legs(self.as_str()).0
    }
}
