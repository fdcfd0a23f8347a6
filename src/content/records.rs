//! Typed records for each collection.
//!
//! Each record names the fields the core reads and keeps everything else in an
//! `extra` map, so profile details, dates, images and the like pass through to
//! callers untouched.

use super::Collection;
use crate::slug::slugify;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields not modelled by the core.
pub type Extra = Map<String, Value>;

/// Behaviour shared by every record kind.
pub trait Record: DeserializeOwned + Serialize + Clone + Send + 'static {
    /// The collection this record kind is loaded from.
    const COLLECTION: Collection;

    /// Identifier, unique within the collection.
    fn id(&self) -> i64;

    /// Display string the slug is derived from (`name`, or `title` for news).
    fn label(&self) -> &str;

    /// Slug computed from the label at call time.
    fn slug(&self) -> String {
        slugify(self.label())
    }
}

/// A government official.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Official {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A ministry, optionally pointing at the official who leads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ministry {
    pub id: i64,
    pub name: String,
    /// Foreign key into [`Official::id`]. May be absent or dangling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Category tokens as stored. Membership checks decide their own casing.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl NewsArticle {
    /// Case-insensitive category membership.
    pub fn in_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }

    /// Whether the two articles share a category string exactly as stored.
    pub fn shares_category_with(&self, other: &Self) -> bool {
        other.categories.iter().any(|c| self.categories.contains(c))
    }
}

/// A public service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Record for Official {
    const COLLECTION: Collection = Collection::Officials;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Record for Ministry {
    const COLLECTION: Collection = Collection::Ministries;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Record for NewsArticle {
    const COLLECTION: Collection = Collection::News;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Record for Service {
    const COLLECTION: Collection = Collection::Services;

    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// A record of any kind, for callers that pick the collection at runtime.
///
/// Serializes as the bare record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Official(Official),
    Ministry(Ministry),
    News(NewsArticle),
    Service(Service),
}

impl Entry {
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Official(_) => Collection::Officials,
            Self::Ministry(_) => Collection::Ministries,
            Self::News(_) => Collection::News,
            Self::Service(_) => Collection::Services,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Official(r) => r.id(),
            Self::Ministry(r) => r.id(),
            Self::News(r) => r.id(),
            Self::Service(r) => r.id(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Official(r) => r.label(),
            Self::Ministry(r) => r.label(),
            Self::News(r) => r.label(),
            Self::Service(r) => r.label(),
        }
    }

    pub fn slug(&self) -> String {
        slugify(self.label())
    }
}

impl From<Official> for Entry {
    fn from(value: Official) -> Self {
        Self::Official(value)
    }
}

impl From<Ministry> for Entry {
    fn from(value: Ministry) -> Self {
        Self::Ministry(value)
    }
}

impl From<NewsArticle> for Entry {
    fn from(value: NewsArticle) -> Self {
        Self::News(value)
    }
}

impl From<Service> for Entry {
    fn from(value: Service) -> Self {
        Self::Service(value)
    }
}
