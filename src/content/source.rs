//! Read-only access to the raw collection documents.

use super::Collection;
use crate::error::SourceFailure;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Something that can produce the raw document for a collection.
///
/// Implementations are read-only and are asked again on every load; nothing
/// above this trait caches what it returns.
pub trait ContentSource: Send + Sync + std::fmt::Debug {
    /// Read the document (a JSON array of records) for `collection`.
    fn read(&self, collection: Collection) -> Result<Value, SourceFailure>;
}

/// Collections stored as `<dir>/<collection>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    root: PathBuf,
}

impl JsonDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document backing `collection`.
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }
}

impl ContentSource for JsonDirectory {
    fn read(&self, collection: Collection) -> Result<Value, SourceFailure> {
        let path = self.path_for(collection);
        let text = std::fs::read_to_string(&path).map_err(|source| SourceFailure::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SourceFailure::Parse { source })
    }
}

/// In-memory documents, for fixtures and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Collection, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the document for a collection, replacing any previous one.
    #[must_use]
    pub fn with(mut self, collection: Collection, document: Value) -> Self {
        self.documents.insert(collection, document);
        self
    }

    pub fn insert(&mut self, collection: Collection, document: Value) {
        self.documents.insert(collection, document);
    }
}

impl ContentSource for MemorySource {
    fn read(&self, collection: Collection) -> Result<Value, SourceFailure> {
        self.documents
            .get(&collection)
            .cloned()
            .ok_or(SourceFailure::Missing)
    }
}
