//! Menu category type.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A menu category.
///
/// The storefront ships with coffee, tea, and pastry sections, but the
/// enumeration is open: categories parsed from persisted data that don't
/// match a known section are preserved verbatim in [`Category::Other`].
///
/// Serializes as the lowercase category name (`"coffee"`, `"tea"`, ...),
/// which is also the value used by the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Coffee,
    Tea,
    Pastry,
    /// A category not known to this build of the storefront.
    Other(String),
}

impl Category {
    /// The category name as used in selectors and persisted data.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Coffee => "coffee",
            Self::Tea => "tea",
            Self::Pastry => "pastry",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "coffee" => Self::Coffee,
            "tea" => Self::Tea,
            "pastry" => Self::Pastry,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}
