//! Slug lookup handler.

use super::to_json;
use crate::content::{Collection, ContentStore, Official, Service};
use anyhow::{Result, bail};
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecordRequest {
    /// One of: officials, ministries, news, services
    pub collection: String,
    /// URL slug, e.g. "irakli-kobakhidze"
    pub slug: String,
}

/// Resolve a slug to its record.
///
/// Ministries come back with their leader and news articles with related
/// articles, mirroring what their detail pages show. Unknown slugs are an
/// error at this boundary so the caller can report "Not found".
pub fn handle_get_record(store: &ContentStore, request: GetRecordRequest) -> Result<String> {
    let collection: Collection = request.collection.parse()?;
    let slug = request.slug.as_str();

    let rendered = match collection {
        Collection::Officials => store.resolve_by_slug::<Official>(slug)?.map(|r| to_json(&r)),
        Collection::Ministries => store.ministry_detail(slug)?.map(|r| to_json(&r)),
        Collection::News => store.news_detail(slug)?.map(|r| to_json(&r)),
        Collection::Services => store.resolve_by_slug::<Service>(slug)?.map(|r| to_json(&r)),
    };

    match rendered {
        Some(json) => json,
        None => bail!("Not found: no {} with slug '{}'", collection, slug),
    }
}
