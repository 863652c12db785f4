//! Standard library and serde conversions for `Path`
//!
//! The textual form is the only wire format: serialization writes it
//! verbatim and deserialization runs it through the scanner.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::types::Path;
use crate::error::{PathError, PathResult};
use crate::scanner::validate_path;

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Path {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Path {
    type Err = PathError;

    #[inline]
    fn from_str(s: &str) -> PathResult<Self> {
        Path::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    #[inline]
    fn try_from(value: &str) -> PathResult<Self> {
        Path::parse(value)
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    #[inline]
    fn try_from(value: String) -> PathResult<Self> {
        validate_path(&value)?;
        Ok(Path::from_string_unchecked(value))
    }
}

impl From<Path> for String {
    #[inline]
    fn from(path: Path) -> Self {
        path.into_string()
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PathVisitor)
    }
}

struct PathVisitor;

impl<'de> Visitor<'de> for PathVisitor {
    type Value = Path;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a document path string such as \"$.user.name\"")
    }

    fn visit_none<E: de::Error>(self) -> Result<Path, E> {
        Err(E::custom(PathError::MissingPath))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Path, E> {
        Err(E::custom(PathError::MissingPath))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Path, E> {
        Path::parse(value).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Path, E> {
        Path::try_from(value).map_err(E::custom)
    }
}
