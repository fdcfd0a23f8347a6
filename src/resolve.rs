//! Slug and id lookups against freshly loaded collections.

use crate::content::{
    Collection, ContentStore, Entry, Ministry, NewsArticle, Official, Record, Service,
};
use crate::error::Result;
use crate::slug::slugify;

/// First record in `records` whose label slugifies to `slug`.
///
/// Slugs are not unique: when several records collide the earliest one in
/// source order wins and the rest are unreachable by slug.
pub fn find_by_slug<'a, R: Record>(records: &'a [R], slug: &str) -> Option<&'a R> {
    records.iter().find(|r| slugify(r.label()) == slug)
}

/// First record in `records` with the given id.
pub fn find_by_id<R: Record>(records: &[R], id: i64) -> Option<&R> {
    records.iter().find(|r| r.id() == id)
}

impl ContentStore {
    /// Resolve a slug within one collection. `None` means no record matched.
    pub fn resolve_by_slug<R: Record>(&self, slug: &str) -> Result<Option<R>> {
        let collection = R::COLLECTION;
        let records = self.load::<R>()?;
        let found = find_by_slug(&records, slug).cloned();
        tracing::debug!(
            %collection,
            slug,
            found = found.is_some(),
            "Resolved slug"
        );
        Ok(found)
    }

    /// Resolve a slug within a collection chosen at runtime.
    pub fn resolve(&self, collection: Collection, slug: &str) -> Result<Option<Entry>> {
        Ok(match collection {
            Collection::Officials => self.resolve_by_slug::<Official>(slug)?.map(Entry::from),
            Collection::Ministries => self.resolve_by_slug::<Ministry>(slug)?.map(Entry::from),
            Collection::News => self.resolve_by_slug::<NewsArticle>(slug)?.map(Entry::from),
            Collection::Services => self.resolve_by_slug::<Service>(slug)?.map(Entry::from),
        })
    }

    /// Look a record up by id.
    pub fn get_by_id<R: Record>(&self, id: i64) -> Result<Option<R>> {
        let records = self.load::<R>()?;
        Ok(find_by_id(&records, id).cloned())
    }

    /// The official leading `ministry`.
    ///
    /// An absent `leader_id`, or one that matches no official, yields `None`.
    pub fn resolve_leader(&self, ministry: &Ministry) -> Result<Option<Official>> {
        let Some(leader_id) = ministry.leader_id else {
            return Ok(None);
        };

        let leader = self.get_by_id::<Official>(leader_id)?;
        if leader.is_none() {
            tracing::debug!(
                ministry = %ministry.name,
                leader_id,
                "Ministry leader does not match any official"
            );
        }
        Ok(leader)
    }
}
