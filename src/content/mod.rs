//! Content store: collections, typed records, and the sources they load from.

pub mod collection;
pub mod records;
pub mod source;
pub mod store;

pub use collection::{Collection, UnknownCollection};
pub use records::{Entry, Extra, Ministry, NewsArticle, Official, Record, Service};
pub use source::{ContentSource, JsonDirectory, MemorySource};
pub use store::ContentStore;
