//! Derived views: category facets, filtered listings, related articles, and
//! the record bundles each site page is rendered from.
//!
//! Category handling is deliberately asymmetric. Filtering by category
//! ignores case, while "related" compares category strings exactly as stored,
//! so `"Health"` and `"health"` filter together but are not related.

use crate::content::{ContentStore, Ministry, NewsArticle, Official, Service};
use crate::error::Result;
use ahash::AHashSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// Articles listed under `category`, ignoring case.
pub fn articles_in_category(articles: Vec<NewsArticle>, category: &str) -> Vec<NewsArticle> {
    articles
        .into_iter()
        .filter(|a| a.in_category(category))
        .collect()
}

/// Every category used by any article, sorted and deduplicated.
///
/// Deduplication is exact: `"Health"` and `"health"` are both listed.
pub fn category_facets(articles: &[NewsArticle]) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| a.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Up to `limit` other articles sharing a stored category string with `article`.
pub fn related_articles(
    articles: Vec<NewsArticle>,
    article: &NewsArticle,
    limit: usize,
) -> Vec<NewsArticle> {
    let wanted: AHashSet<&str> = article.categories.iter().map(String::as_str).collect();
    articles
        .into_iter()
        .filter(|a| a.id != article.id)
        .filter(|a| a.categories.iter().any(|c| wanted.contains(c.as_str())))
        .take(limit)
        .collect()
}

/// Distinct service categories, sorted.
pub fn service_categories(services: &[Service]) -> Vec<String> {
    services
        .iter()
        .map(|s| s.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Landing page content.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub latest_news: Vec<NewsArticle>,
    pub popular_services: Vec<Service>,
}

/// News listing, optionally filtered, with the full facet list.
#[derive(Debug, Clone, Serialize)]
pub struct NewsIndex {
    pub articles: Vec<NewsArticle>,
    pub categories: Vec<String>,
    /// The filter as requested, or `None` when unfiltered.
    pub selected_category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsDetail {
    pub article: NewsArticle,
    pub related: Vec<NewsArticle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MinistryDetail {
    pub ministry: Ministry,
    pub leader: Option<Official>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesIndex {
    pub services: Vec<Service>,
    pub categories: Vec<String>,
}

impl ContentStore {
    /// News in `category` (case-insensitive). Unknown categories give an empty list.
    pub fn filter_by_category(&self, category: &str) -> Result<Vec<NewsArticle>> {
        Ok(articles_in_category(self.load()?, category))
    }

    /// Sorted, deduplicated categories across all news.
    pub fn distinct_categories(&self) -> Result<Vec<String>> {
        Ok(category_facets(&self.load::<NewsArticle>()?))
    }

    /// Up to `limit` articles sharing a category with `article`, excluding itself.
    pub fn related_to(&self, article: &NewsArticle, limit: usize) -> Result<Vec<NewsArticle>> {
        Ok(related_articles(self.load()?, article, limit))
    }

    /// Sorted distinct service categories.
    pub fn distinct_service_categories(&self) -> Result<Vec<String>> {
        Ok(service_categories(&self.load::<Service>()?))
    }

    /// The first few news items and services, in source order.
    pub fn home(&self) -> Result<HomeView> {
        let limits = self.limits();
        let mut latest_news: Vec<NewsArticle> = self.load()?;
        latest_news.truncate(limits.home_news);
        let mut popular_services: Vec<Service> = self.load()?;
        popular_services.truncate(limits.home_services);

        Ok(HomeView {
            latest_news,
            popular_services,
        })
    }

    /// News listing. An absent or empty category means no filter.
    pub fn news_index(&self, category: Option<&str>) -> Result<NewsIndex> {
        let selected = category.filter(|c| !c.is_empty());
        let articles = match selected {
            Some(category) => self.filter_by_category(category)?,
            None => self.load()?,
        };

        Ok(NewsIndex {
            articles,
            categories: self.distinct_categories()?,
            selected_category: selected.map(str::to_string),
        })
    }

    /// An article and its related articles, or `None` for an unknown slug.
    pub fn news_detail(&self, slug: &str) -> Result<Option<NewsDetail>> {
        let Some(article) = self.resolve_by_slug::<NewsArticle>(slug)? else {
            return Ok(None);
        };
        let related = self.related_to(&article, self.limits().related)?;
        Ok(Some(NewsDetail { article, related }))
    }

    /// A ministry and its leader, or `None` for an unknown slug.
    pub fn ministry_detail(&self, slug: &str) -> Result<Option<MinistryDetail>> {
        let Some(ministry) = self.resolve_by_slug::<Ministry>(slug)? else {
            return Ok(None);
        };
        let leader = self.resolve_leader(&ministry)?;
        Ok(Some(MinistryDetail { ministry, leader }))
    }

    pub fn services_index(&self) -> Result<ServicesIndex> {
        let services: Vec<Service> = self.load()?;
        let categories = service_categories(&services);
        Ok(ServicesIndex {
            services,
            categories,
        })
    }
}
