//! Case-insensitive substring search across collections.
//!
//! There is no index and no ranking: a record matches when the lowercased
//! query occurs in one of its searchable fields, and results keep source order.

pub mod engine;
pub mod query;

pub use engine::{
    ApiSearchResults, NotSearchable, SearchHit, SearchScope, Searchable, filter_matches,
};
pub use query::Needle;
