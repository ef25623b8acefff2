use super::ContentTemplate;
use crate::models::{FilterValue, PagedResults, SearchFilter, SearchQuery, SearchResultItem};
use crate::providers::SearchResultsProviding;
use async_trait::async_trait;
use inkdex_catalog::models::TitleRecord;
use tracing::instrument;

pub const SEARCH_FILTER_ID: &str = "search-filter-template";

/// Tests the primary title first, then each secondary title in order,
/// stopping at the first one that satisfies `filter`.
///
/// `needle` must already be lower-cased.
fn accepts(title: &TitleRecord, filter: FilterValue, needle: &str) -> bool {
    let primary = title.primary_title.as_deref().unwrap_or_default();
    filter.accepts(primary, needle)
        || title
            .secondary_titles
            .iter()
            .filter(|secondary| !secondary.is_empty())
            .any(|secondary| filter.accepts(secondary, needle))
}

#[async_trait]
impl SearchResultsProviding for ContentTemplate {
    async fn get_search_filters(&self) -> Vec<SearchFilter> {
        vec![SearchFilter::dropdown(
            SEARCH_FILTER_ID,
            "Search Filter Template",
            &[FilterValue::Include, FilterValue::Exclude],
            FilterValue::default(),
        )]
    }

    /// Results are returned as a single page; `metadata` is ignored.
    #[instrument(skip_all, fields(query = %query.title, filter = %query.filter_value()))]
    async fn get_search_results(&self, query: &SearchQuery, _metadata: Option<u32>) -> PagedResults<SearchResultItem> {
        let filter = query.filter_value();
        let needle = query.title.to_lowercase();
        let page: PagedResults<_> = self
            .catalog
            .titles()
            .iter()
            .filter(|title| accepts(title, filter, &needle))
            .filter_map(SearchResultItem::from_title)
            .collect();
        tracing::debug!(results = page.items.len(), "Search completed");
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::tests::catalog;
    use inkdex_catalog::Catalog;
    use rstest::rstest;

    async fn search(extension: &ContentTemplate, title: &str, filter: Option<FilterValue>) -> Vec<String> {
        let mut query = SearchQuery::new(title);
        if let Some(filter) = filter {
            query = query.with_filter(SEARCH_FILTER_ID, filter);
        }
        let page = extension.get_search_results(&query, None).await;
        assert!(page.is_last());
        page.items.into_iter().map(|item| item.manga_id).collect()
    }

    fn red_and_blue() -> ContentTemplate {
        ContentTemplate::new(Catalog::new(vec![
            TitleRecord::new("A", "Red Sky"),
            TitleRecord::new("B", "Blue Moon"),
        ]))
    }

    #[rstest]
    #[case("red", FilterValue::Include, &["A"])]
    #[case("red", FilterValue::Exclude, &["B"])]
    #[case("RED", FilterValue::Include, &["A"])]
    #[case("o", FilterValue::Include, &["B"])]
    #[case("", FilterValue::Include, &["A", "B"])]
    #[case("", FilterValue::Exclude, &[])]
    #[case("green", FilterValue::Include, &[])]
    #[tokio::test]
    async fn test_primary_title_search(#[case] title: &str, #[case] filter: FilterValue, #[case] expected: &[&str]) {
        assert_eq!(search(&red_and_blue(), title, Some(filter)).await, expected);
    }

    #[tokio::test]
    async fn test_missing_filter_means_exclude() {
        assert_eq!(search(&red_and_blue(), "red", None).await, ["B"]);
    }

    #[tokio::test]
    async fn test_secondary_titles_are_searched() {
        let extension = ContentTemplate::new(catalog());
        assert_eq!(search(&extension, "tsuki", Some(FilterValue::Include)).await, ["B"]);
        assert_eq!(search(&extension, "rouge", Some(FilterValue::Include)).await, ["B"]);
    }

    #[tokio::test]
    async fn test_exclude_accepts_any_non_matching_title() {
        // "Blue Moon" contains "moon", but its secondary "Aoi Tsuki" doesn't.
        let extension = ContentTemplate::new(catalog());
        assert_eq!(search(&extension, "moon", Some(FilterValue::Exclude)).await, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_entries_appear_once() {
        let extension = ContentTemplate::new(Catalog::new(vec![
            TitleRecord::new("A", "Red Sky").with_secondary_titles(["Red Sky Again", "Redder Sky"]),
        ]));
        assert_eq!(search(&extension, "red", Some(FilterValue::Include)).await, ["A"]);
    }

    #[tokio::test]
    async fn test_entries_without_id_are_skipped() {
        let extension = ContentTemplate::new(Catalog::new(vec![
            TitleRecord {
                primary_title: Some("Red Dawn".to_string()),
                ..TitleRecord::default()
            },
            TitleRecord::new("A", "Red Sky"),
        ]));
        assert_eq!(search(&extension, "red", Some(FilterValue::Include)).await, ["A"]);
    }

    #[tokio::test]
    async fn test_search_is_idempotent() {
        let extension = ContentTemplate::new(catalog());
        let query = SearchQuery::new("s").with_filter(SEARCH_FILTER_ID, FilterValue::Include);
        let first = extension.get_search_results(&query, None).await;
        let second = extension.get_search_results(&query, None).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_result_fields() {
        let extension = ContentTemplate::new(catalog());
        let query = SearchQuery::new("red").with_filter(SEARCH_FILTER_ID, "include");
        let page = extension.get_search_results(&query, None).await;
        let item = &page.items[0];
        assert_eq!(item.manga_id, "A");
        assert_eq!(item.title, "Red Sky");
        assert_eq!(item.subtitle, "Akai Sora");
        assert_eq!(item.image_url, "https://example.com/a.png");
    }

    #[tokio::test]
    async fn test_search_filters() {
        let filters = ContentTemplate::new(catalog()).get_search_filters().await;
        assert_eq!(filters.len(), 1);
        let filter = &filters[0];
        assert_eq!(filter.id, SEARCH_FILTER_ID);
        assert_eq!(filter.kind, "dropdown");
        assert_eq!(filter.value, "exclude");
        let options: Vec<_> = filter.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(options, ["include", "exclude"]);
    }
}
