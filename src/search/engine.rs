//! Substring search over news and services.

use super::query::Needle;
use crate::content::{ContentStore, Entry, NewsArticle, Record, Service};
use crate::error::Result;
use crate::slug::slugify;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A record kind with designated free-text fields.
pub trait Searchable: Record {
    /// Origin tag reported in search hits.
    const KIND: &'static str;

    /// Fields a query is matched against.
    fn searchable_fields(&self) -> [&str; 2];

    /// Whether any searchable field contains the needle.
    fn matches(&self, needle: &Needle) -> bool {
        self.searchable_fields().iter().any(|f| needle.is_in(f))
    }
}

impl Searchable for NewsArticle {
    const KIND: &'static str = "news";

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.content]
    }
}

impl Searchable for Service {
    const KIND: &'static str = "service";

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.name, &self.description]
    }
}

/// Keep the records matching `needle`, in their original order.
pub fn filter_matches<R: Searchable>(records: Vec<R>, needle: &Needle) -> Vec<R> {
    records.into_iter().filter(|r| r.matches(needle)).collect()
}

/// Collections that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    News,
    Services,
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::News => "news",
            Self::Services => "services",
        })
    }
}

/// Returned when a string names no searchable collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("collection '{0}' is not searchable (expected news or services)")]
pub struct NotSearchable(pub String);

impl FromStr for SearchScope {
    type Err = NotSearchable;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "news" => Ok(Self::News),
            "services" => Ok(Self::Services),
            _ => Err(NotSearchable(s.to_string())),
        }
    }
}

/// One search result as exposed to the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Title or name of the matched record.
    pub label: String,
    /// Slug recomputed from the label, never read from storage.
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl SearchHit {
    pub fn from_record<R: Searchable>(record: &R) -> Self {
        Self {
            label: record.label().to_string(),
            slug: slugify(record.label()),
            kind: R::KIND,
        }
    }
}

/// Combined search-box results, capped per collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiSearchResults {
    pub news: Vec<SearchHit>,
    pub services: Vec<SearchHit>,
}

impl ApiSearchResults {
    pub fn is_empty(&self) -> bool {
        self.news.is_empty() && self.services.is_empty()
    }

    pub fn len(&self) -> usize {
        self.news.len() + self.services.len()
    }
}

fn top_hits<R: Searchable>(records: &[R], limit: usize) -> Vec<SearchHit> {
    records
        .iter()
        .take(limit)
        .map(SearchHit::from_record)
        .collect()
}

impl ContentStore {
    /// Records whose searchable fields contain `query`, case-insensitively.
    ///
    /// The query is only lowercased, not trimmed; an empty query returns the
    /// whole collection.
    pub fn search<R: Searchable>(&self, query: &str) -> Result<Vec<R>> {
        self.search_needle(&Needle::new(query))
    }

    fn search_needle<R: Searchable>(&self, needle: &Needle) -> Result<Vec<R>> {
        let collection = R::COLLECTION;
        let hits = filter_matches(self.load::<R>()?, needle);
        tracing::debug!(
            %collection,
            query = needle.as_str(),
            hits = hits.len(),
            "Searched collection"
        );
        Ok(hits)
    }

    /// [`search`](Self::search) against a collection chosen at runtime.
    pub fn search_scope(&self, query: &str, scope: SearchScope) -> Result<Vec<Entry>> {
        Ok(match scope {
            SearchScope::News => self
                .search::<NewsArticle>(query)?
                .into_iter()
                .map(Entry::from)
                .collect(),
            SearchScope::Services => self
                .search::<Service>(query)?
                .into_iter()
                .map(Entry::from)
                .collect(),
        })
    }

    /// Search news and services for the site search box.
    ///
    /// Queries shorter than the configured minimum (after trimming) return
    /// empty lists without touching the source. Otherwise each list holds at
    /// most `api_results` hits in source order.
    pub fn api_search(&self, query: &str) -> Result<ApiSearchResults> {
        let limits = self.limits();
        let Some(needle) = Needle::for_api(query, limits.min_query_len) else {
            tracing::debug!(query, "Search query below minimum length");
            return Ok(ApiSearchResults::default());
        };

        let news = self.search_needle::<NewsArticle>(&needle)?;
        let services = self.search_needle::<Service>(&needle)?;

        Ok(ApiSearchResults {
            news: top_hits(&news, limits.api_results),
            services: top_hits(&services, limits.api_results),
        })
    }
}
