//! Content resolution and search for a government information website.
//!
//! Collections of officials, ministries, news, and services are read from a
//! [`ContentSource`](content::ContentSource) on every call, turned into typed
//! records, and exposed through slug lookups, substring search, and the
//! derived views the site pages are built from.

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod search;
pub mod server;
pub mod slug;
pub mod tools;
pub mod views;

pub use config::{Limits, SiteConfig};
pub use content::{
    Collection, ContentSource, ContentStore, Entry, JsonDirectory, MemorySource, Ministry,
    NewsArticle, Official, Record, Service,
};
pub use error::{ContentError, Result, SourceFailure};
pub use search::{ApiSearchResults, SearchHit, SearchScope, Searchable};
pub use slug::slugify;
pub use views::{HomeView, MinistryDetail, NewsDetail, NewsIndex, ServicesIndex};
