//! Listing handlers: landing page, news index, services index.

use super::to_json;
use crate::content::ContentStore;
use anyhow::Result;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListNewsRequest {
    /// Only articles in this category (case-insensitive). Omit for all news.
    #[serde(default)]
    pub category: Option<String>,
}

/// News articles, optionally filtered, plus every category for building filters.
pub fn handle_list_news(store: &ContentStore, request: ListNewsRequest) -> Result<String> {
    to_json(&store.news_index(request.category.as_deref())?)
}

/// All services plus their distinct categories.
pub fn handle_list_services(store: &ContentStore) -> Result<String> {
    to_json(&store.services_index()?)
}

/// The latest news and most prominent services.
pub fn handle_home(store: &ContentStore) -> Result<String> {
    to_json(&store.home()?)
}
