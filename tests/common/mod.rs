//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `store`: an in-memory store with a small, deliberately awkward data set
//!   (duplicate slugs, mixed-case categories, a dangling ministry leader)
//! - `sample_store`: the `content/` directory shipped with the crate
//!
//! Every fixture installs DEBUG-level tracing through the test writer.
//!
//! [`TempContentDir`] writes collection files to a temp directory for tests
//! that exercise the on-disk source.

use civic_content::{Collection, ContentStore, JsonDirectory, MemorySource, logging};
use rstest::fixture;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
#[allow(dead_code)] // Used across different integration test crates
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn officials() -> Value {
    json!([
        {"id": 1, "name": "Jane Doe", "position": "Prime Minister", "email": "pm@gov.example"},
        {"id": 2, "name": "John Smith", "position": "Minister of Health"},
        {"id": 3, "name": "Jane  Doe!", "position": "Deputy Minister of Finance"},
        {"id": 4, "name": "Nino Beridze", "position": "Minister of Education"}
    ])
}

pub fn ministries() -> Value {
    json!([
        {"id": 1, "name": "Ministry of Health & Education", "leader_id": 2},
        {"id": 2, "name": "Ministry of Finance", "leader_id": 99},
        {"id": 3, "name": "Ministry of Culture"},
        {"id": 4, "name": "Ministry of Education", "leader_id": 4, "website": "https://edu.gov.example"}
    ])
}

pub fn news() -> Value {
    json!([
        {"id": 1, "title": "Hospital Funding Increased", "content": "The health budget grows next year.", "categories": ["Health", "Economy"], "date": "2024-12-01"},
        {"id": 2, "title": "New School Year Begins", "content": "Schools reopen across the country.", "categories": ["Education"]},
        {"id": 3, "title": "Clinic Hours Extended", "content": "Regional clinics stay open longer.", "categories": ["health"]},
        {"id": 4, "title": "Budget Debate Scheduled", "content": "Parliament will discuss the economy.", "categories": ["Economy"]},
        {"id": 5, "title": "Help?", "content": "Where to find help with public services.", "categories": ["Services"]},
        {"id": 6, "title": "Health Insurance Reform", "content": "Coverage expands to freelancers.", "categories": ["Health"]},
        {"id": 7, "title": "Health Workers Honoured", "content": "Awards for nurses and doctors.", "categories": ["Health"]},
        {"id": 8, "title": "Health Data Published", "content": "Annual statistics released.", "categories": ["Health"]}
    ])
}

pub fn services() -> Value {
    json!([
        {"id": 1, "name": "Passport Application", "description": "Apply for a new passport.", "category": "Documents"},
        {"id": 2, "name": "Health Insurance Enrolment", "description": "Join the public health plan.", "category": "Health"},
        {"id": 3, "name": "Business Registration", "description": "Register a company.", "category": "Business"},
        {"id": 4, "name": "ID Card Renewal", "description": "Renew your identity document.", "category": "Documents"},
        {"id": 5, "name": "Tax Filing", "description": "Submit your annual declaration.", "category": "Finance"},
        {"id": 6, "name": "Vehicle Registration", "description": "Register a car or motorcycle.", "category": "Transport"},
        {"id": 7, "name": "Birth Certificate", "description": "Request a certificate of birth.", "category": "Documents"},
        {"id": 8, "name": "Pension Application", "description": "Apply for the state pension.", "category": "Social"}
    ])
}

#[allow(dead_code)] // Used across different integration test crates
pub fn memory_source() -> MemorySource {
    MemorySource::new()
        .with(Collection::Officials, officials())
        .with(Collection::Ministries, ministries())
        .with(Collection::News, news())
        .with(Collection::Services, services())
}

/// In-memory store over the fixture data.
#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn store() -> ContentStore {
    logging::init_for_tests();
    ContentStore::new(memory_source())
}

/// Store over the `content/` directory shipped with the crate.
#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn sample_store() -> ContentStore {
    logging::init_for_tests();
    ContentStore::new(JsonDirectory::new(project_root().join("content")))
}

/// A temporary content directory, removed when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempContentDir {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempContentDir {
    /// Creates an empty content directory.
    pub fn new() -> Self {
        logging::init_for_tests();
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Creates a content directory holding all four fixture collections.
    pub fn with_fixtures() -> Self {
        let dir = Self::new();
        dir.write(Collection::Officials, &officials());
        dir.write(Collection::Ministries, &ministries());
        dir.write(Collection::News, &news());
        dir.write(Collection::Services, &services());
        dir
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a collection document as JSON.
    pub fn write(&self, collection: Collection, document: &Value) {
        let text = serde_json::to_string_pretty(document).expect("Failed to serialize fixture");
        self.write_raw(collection, &text);
    }

    /// Writes arbitrary text as a collection file.
    pub fn write_raw(&self, collection: Collection, text: &str) {
        let path = self.root.join(collection.file_name());
        std::fs::write(&path, text)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
    }

    /// Removes a collection file.
    pub fn remove(&self, collection: Collection) {
        let path = self.root.join(collection.file_name());
        std::fs::remove_file(&path)
            .unwrap_or_else(|e| panic!("Failed to remove '{}': {}", path.display(), e));
    }

    /// A store reading from this directory.
    pub fn store(&self) -> ContentStore {
        ContentStore::new(JsonDirectory::new(&self.root))
    }
}

impl Default for TempContentDir {
    fn default() -> Self {
        Self::new()
    }
}
