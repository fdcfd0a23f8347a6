//! Typed loading of collections from a [`ContentSource`].

use super::records::{Entry, Ministry, NewsArticle, Official, Record, Service};
use super::source::{ContentSource, JsonDirectory};
use super::Collection;
use crate::config::{Limits, SiteConfig};
use crate::error::{ContentError, Result, SourceFailure};
use std::sync::Arc;

/// Entry point to the content core.
///
/// Holds no records. Every operation asks the source for a fresh snapshot of
/// the collections it needs, so concurrent callers never share mutable state
/// and edits to the source are visible on the next call.
#[derive(Debug, Clone)]
pub struct ContentStore {
    source: Arc<dyn ContentSource>,
    limits: Limits,
}

impl ContentStore {
    /// Create a store over `source` with default listing limits.
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            limits: Limits::default(),
        }
    }

    /// Create a store reading `<content_dir>/<collection>.json` with the
    /// configured limits.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(JsonDirectory::new(&config.content_dir)).with_limits(config.limits.clone())
    }

    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Load a collection in source order.
    pub fn load<R: Record>(&self) -> Result<Vec<R>> {
        let collection = R::COLLECTION;
        let document = self
            .source
            .read(collection)
            .map_err(|cause| unavailable(collection, cause))?;

        let records: Vec<R> = serde_json::from_value(document)
            .map_err(|source| unavailable(collection, SourceFailure::Parse { source }))?;

        tracing::debug!(%collection, count = records.len(), "Loaded collection");
        Ok(records)
    }

    /// Load a collection chosen at runtime.
    pub fn load_entries(&self, collection: Collection) -> Result<Vec<Entry>> {
        fn wrap<R: Record + Into<Entry>>(records: Vec<R>) -> Vec<Entry> {
            records.into_iter().map(Into::into).collect()
        }

        Ok(match collection {
            Collection::Officials => wrap(self.load::<Official>()?),
            Collection::Ministries => wrap(self.load::<Ministry>()?),
            Collection::News => wrap(self.load::<NewsArticle>()?),
            Collection::Services => wrap(self.load::<Service>()?),
        })
    }
}

fn unavailable(collection: Collection, cause: SourceFailure) -> ContentError {
    tracing::warn!(%collection, "Content source unavailable: {}", cause);
    ContentError::SourceUnavailable { collection, cause }
}
