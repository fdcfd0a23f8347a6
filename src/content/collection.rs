//! Collection names and their on-disk file mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, ordered set of records of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Officials,
    Ministries,
    News,
    Services,
}

impl Collection {
    /// Every collection, in the order the site navigation lists them.
    pub const ALL: [Self; 4] = [Self::Officials, Self::Ministries, Self::News, Self::Services];

    /// Wire name used in URLs and tool parameters.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Officials => "officials",
            Self::Ministries => "ministries",
            Self::News => "news",
            Self::Services => "services",
        }
    }

    /// Name of the JSON document holding this collection.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection '{0}' (expected one of: officials, ministries, news, services)")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCollection(s.to_string()))
    }
}
