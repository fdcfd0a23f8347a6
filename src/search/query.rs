//! Query normalization for substring search.

/// A lowercased search needle.
///
/// Matching is plain substring containment against lowercased fields. There is
/// no tokenization, so an empty needle matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    /// Lowercase `query` as given. Whitespace is significant.
    pub fn new(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    /// Normalize a query typed into the site search box.
    ///
    /// The query is trimmed first; anything shorter than `min_len` characters
    /// yields `None` so callers can answer with an empty result instead of
    /// scanning for a single letter.
    pub fn for_api(query: &str, min_len: usize) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.chars().count() < min_len {
            return None;
        }
        Some(Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `field`, lowercased, contains this needle.
    pub fn is_in(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}
