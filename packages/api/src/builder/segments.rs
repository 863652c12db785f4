//! Segment methods for `PathBuilder`

use docpath_core::validation::{
    push_array_element, push_member, push_path, push_recursive_descent, push_wildcard,
    require_key,
};
use docpath_core::{Path, PathResult};

use super::core::PathBuilder;

impl PathBuilder {
    /// Append a member leg (`.key`)
    #[must_use]
    pub fn member(self, key: &str) -> Self {
        self.apply(|text| push_member(text, key))
    }

    /// Append a member leg for a key that may be absent
    ///
    /// `None` records `PathError::MissingKey`.
    #[must_use]
    pub fn member_opt(self, key: Option<&str>) -> Self {
        self.apply(|text| push_member(text, require_key(key)?))
    }

    /// Append an array index leg (`[index]`)
    #[must_use]
    pub fn array_element(self, index: i64) -> Self {
        self.apply(|text| push_array_element(text, index))
    }

    /// Append an index wildcard leg (`[*]`)
    #[must_use]
    pub fn wildcard(self) -> Self {
        self.apply(|text| {
            push_wildcard(text);
            Ok(())
        })
    }

    /// Append a recursive descent to member `key` (`.**.key`)
    #[must_use]
    pub fn recursive_descent(self, key: &str) -> Self {
        self.apply(|text| push_recursive_descent(text, key))
    }

    /// Append every leg of `path`
    ///
    /// Renders the same text as `Path::join`.
    #[must_use]
    pub fn extend(self, path: &Path) -> Self {
        self.apply(|text| {
            push_path(text, path.as_str());
            Ok(())
        })
    }

    fn apply<F>(mut self, render: F) -> Self
    where
        F: FnOnce(&mut String) -> PathResult<()>,
    {
        if self.error.is_none() {
            match render(&mut self.text) {
                Ok(()) => self.segments += 1,
                Err(error) => self.error = Some(error),
            }
        }
        self
    }
}
