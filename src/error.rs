//! Error handling types and utilities.

use crate::content::Collection;
use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Error returned when a collection cannot be materialized.
///
/// Lookups that find nothing are not errors; they return `None`.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The backing data for a collection could not be read or parsed.
    #[error("{collection} source unavailable: {cause}")]
    SourceUnavailable {
        collection: Collection,
        #[source]
        cause: SourceFailure,
    },
}

impl ContentError {
    /// The collection whose source failed.
    pub const fn collection(&self) -> Collection {
        match self {
            Self::SourceUnavailable { collection, .. } => *collection,
        }
    }
}

/// Why a content source could not produce a collection.
#[derive(Debug, Error)]
pub enum SourceFailure {
    /// Collection file missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document is not a list of records with the expected fields.
    #[error("malformed records: {source}")]
    Parse { source: serde_json::Error },
    /// An in-memory source has nothing registered for the collection.
    #[error("no document registered")]
    Missing,
}
