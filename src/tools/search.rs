//! Search handler backing the site search box.

use super::to_json;
use crate::content::ContentStore;
use crate::search::SearchScope;
use anyhow::Result;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Text to look for in news titles and bodies, and service names and descriptions
    pub query: String,
    /// Restrict to one collection ("news" or "services") and return full records
    #[serde(default)]
    pub collection: Option<String>,
}

/// Execute a search.
///
/// Without a collection this is the search box: at most a handful of
/// `{label, slug, type}` hits per collection, and nothing for queries under the
/// minimum length. With a collection every matching record is returned in full.
pub fn handle_search(store: &ContentStore, request: SearchRequest) -> Result<String> {
    match request.collection.as_deref() {
        None => to_json(&store.api_search(&request.query)?),
        Some(name) => {
            let scope: SearchScope = name.parse()?;
            to_json(&store.search_scope(&request.query, scope)?)
        }
    }
}
