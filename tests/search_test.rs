mod common;

use assert2::check;
use civic_content::{ContentStore, Limits, NewsArticle, SearchScope, Service};
use common::{memory_source, store};
use rstest::rstest;

fn news_ids(articles: &[NewsArticle]) -> Vec<i64> {
    articles.iter().map(|a| a.id).collect()
}

#[rstest]
fn search_matches_title_or_content(store: ContentStore) {
    // "health" is in the content of 1 and the titles of 6, 7, 8
    let hits = store.search::<NewsArticle>("health").unwrap();
    assert_eq!(news_ids(&hits), vec![1, 6, 7, 8]);
}

#[rstest]
fn search_ignores_case(store: ContentStore) {
    let lower = store.search::<Service>("passport").unwrap();
    let upper = store.search::<Service>("PASSPORT").unwrap();
    check!(lower == upper);
    check!(lower.len() == 1);
}

#[rstest]
fn search_matches_service_description(store: ContentStore) {
    let hits = store.search::<Service>("motorcycle").unwrap();
    check!(hits.len() == 1);
    check!(hits[0].name == "Vehicle Registration");
}

/// An empty query is a substring of everything.
#[rstest]
fn empty_query_returns_whole_collection(store: ContentStore) {
    check!(store.search::<NewsArticle>("").unwrap().len() == 8);
    check!(store.search::<Service>("").unwrap().len() == 8);
}

#[rstest]
fn search_does_not_trim(store: ContentStore) {
    check!(store.search::<Service>(" passport ").unwrap().is_empty());
}

#[rstest]
fn no_match_is_empty(store: ContentStore) {
    check!(store.search::<NewsArticle>("zeppelin").unwrap().is_empty());
}

#[rstest]
fn search_scope_returns_entries(store: ContentStore) {
    let entries = store.search_scope("register", SearchScope::Services).unwrap();
    let labels: Vec<&str> = entries.iter().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        vec!["Business Registration", "Vehicle Registration"]
    );
}

#[rstest]
#[case("a")]
#[case("")]
#[case("  h  ")]
fn api_search_short_query_is_empty(store: ContentStore, #[case] query: &str) {
    let results = store.api_search(query).unwrap();
    check!(results.news.is_empty());
    check!(results.services.is_empty());
}

#[rstest]
fn api_search_caps_each_list(store: ContentStore) {
    // Seven articles contain "he"; only the first five are returned.
    let results = store.api_search("he").unwrap();
    check!(results.news.len() == 5);
    check!(results.services.len() <= 5);

    let slugs: Vec<&str> = results.news.iter().map(|h| h.slug.as_str()).collect();
    check!(
        slugs
            == vec![
                "hospital-funding-increased",
                "new-school-year-begins",
                "budget-debate-scheduled",
                "help",
                "health-insurance-reform",
            ]
    );
}

#[rstest]
fn api_search_hits_carry_label_slug_and_type(store: ContentStore) {
    let results = store.api_search("  Passport ").unwrap();
    check!(results.news.is_empty());
    check!(results.services.len() == 1);

    let hit = &results.services[0];
    check!(hit.label == "Passport Application");
    check!(hit.slug == "passport-application");
    check!(hit.kind == "service");

    let value = serde_json::to_value(&results).unwrap();
    check!(value["services"][0]["type"] == "service");
}

#[test]
fn api_search_uses_configured_limits() {
    let store = ContentStore::new(memory_source()).with_limits(Limits {
        api_results: 2,
        min_query_len: 4,
        ..Limits::default()
    });

    check!(store.api_search("tax").unwrap().is_empty());

    let results = store.api_search("health").unwrap();
    check!(results.news.len() == 2);
    check!(results.services.len() == 1);
}

#[test]
fn api_search_short_query_skips_source() {
    // No documents registered: a guarded query must not try to load anything.
    let store = ContentStore::new(civic_content::MemorySource::new());
    check!(store.api_search("x").unwrap().is_empty());
    check!(store.api_search("xy").is_err());
}
