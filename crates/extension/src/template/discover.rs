use super::ContentTemplate;
use crate::models::{DiscoverSection, DiscoverSectionItem, DiscoverSectionType, ItemType, PagedResults};
use crate::providers::DiscoverSectionProviding;
use async_trait::async_trait;
use tracing::instrument;

pub const SECTION_TEMPLATE_1: &str = "discover-section-template1";
pub const SECTION_TEMPLATE_2: &str = "discover-section-template2";
pub const SECTION_TEMPLATE_3: &str = "discover-section-template3";

/// Which slice of the catalog a section shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start: usize,
    stride: usize,
    item: ItemType,
}
impl Layout {
    /// Short numeric ids are accepted alongside the full section ids.
    fn resolve(section_id: &str, catalog_len: usize) -> Option<Self> {
        Some(match section_id {
            SECTION_TEMPLATE_1 | "1" => Self {
                start: 0,
                stride: 2,
                item: ItemType::FeaturedCarouselItem,
            },
            SECTION_TEMPLATE_2 | "2" => Self {
                start: catalog_len / 2,
                stride: 2,
                item: ItemType::ProminentCarouselItem,
            },
            SECTION_TEMPLATE_3 | "3" => Self {
                start: 0,
                stride: 1,
                item: ItemType::SimpleCarouselItem,
            },
            _ => return None,
        })
    }
}

#[async_trait]
impl DiscoverSectionProviding for ContentTemplate {
    async fn get_discover_sections(&self) -> Vec<DiscoverSection> {
        vec![
            DiscoverSection::new(SECTION_TEMPLATE_1, "Discover Section Template 1", DiscoverSectionType::Featured)
                .with_subtitle("This is a template"),
            DiscoverSection::new(
                SECTION_TEMPLATE_2,
                "Discover Section Template 2",
                DiscoverSectionType::ProminentCarousel,
            )
            .with_subtitle("This is another template"),
            DiscoverSection::new(SECTION_TEMPLATE_3, "Discover Section Template 3", DiscoverSectionType::SimpleCarousel)
                .with_subtitle("This is yet another template"),
        ]
    }

    /// The whole section fits in one page, so `metadata` is ignored.
    #[instrument(skip_all, fields(section = %section.id))]
    async fn get_discover_section_items(
        &self,
        section: &DiscoverSection,
        _metadata: Option<u32>,
    ) -> PagedResults<DiscoverSectionItem> {
        let Some(layout) = Layout::resolve(&section.id, self.catalog.len()) else {
            tracing::warn!("Unknown discover section; returning no items");
            return PagedResults::last(Vec::new());
        };
        // `skip` and `step_by` stop at the end of the catalog, so small
        // catalogs never index past the last title.
        let page: PagedResults<_> = self
            .catalog
            .titles()
            .iter()
            .skip(layout.start)
            .step_by(layout.stride)
            .filter_map(|title| DiscoverSectionItem::from_title(title, layout.item))
            .collect();
        tracing::debug!(items = page.items.len(), "Discover section populated");
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkdex_catalog::Catalog;
    use inkdex_catalog::models::TitleRecord;
    use rstest::rstest;

    fn numbered(len: usize) -> ContentTemplate {
        ContentTemplate::new((0..len).map(|i| TitleRecord::new(i.to_string(), format!("Title {i}"))).collect())
    }

    async fn ids(extension: &ContentTemplate, section_id: &str) -> Vec<String> {
        let section = DiscoverSection::new(section_id, "", DiscoverSectionType::Featured);
        let page = extension.get_discover_section_items(&section, None).await;
        assert!(page.is_last());
        page.items.into_iter().map(|item| item.manga_id).collect()
    }

    #[tokio::test]
    async fn test_sections_are_listed_in_order() {
        let sections = numbered(0).get_discover_sections().await;
        let listed: Vec<_> = sections.iter().map(|s| (s.id.as_str(), s.kind)).collect();
        assert_eq!(
            listed,
            [
                (SECTION_TEMPLATE_1, DiscoverSectionType::Featured),
                (SECTION_TEMPLATE_2, DiscoverSectionType::ProminentCarousel),
                (SECTION_TEMPLATE_3, DiscoverSectionType::SimpleCarousel),
            ]
        );
        assert!(sections.iter().all(|s| s.subtitle.is_some()));
    }

    #[tokio::test]
    async fn test_first_section_takes_even_indices() {
        assert_eq!(ids(&numbered(7), SECTION_TEMPLATE_1).await, ["0", "2", "4", "6"]);
    }

    #[tokio::test]
    async fn test_second_section_starts_at_midpoint() {
        assert_eq!(ids(&numbered(7), SECTION_TEMPLATE_2).await, ["3", "5"]);
        assert_eq!(ids(&numbered(8), SECTION_TEMPLATE_2).await, ["4", "6"]);
    }

    #[tokio::test]
    async fn test_third_section_takes_everything() {
        assert_eq!(ids(&numbered(4), SECTION_TEMPLATE_3).await, ["0", "1", "2", "3"]);
    }

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(1, 1, 1, 1)]
    #[case(2, 1, 1, 2)]
    #[case(3, 2, 1, 3)]
    #[tokio::test]
    async fn test_small_catalogs_are_clamped(
        #[case] len: usize,
        #[case] first: usize,
        #[case] second: usize,
        #[case] third: usize,
    ) {
        let extension = numbered(len);
        assert_eq!(ids(&extension, "1").await.len(), first);
        assert_eq!(ids(&extension, "2").await.len(), second);
        assert_eq!(ids(&extension, "3").await.len(), third);
    }

    #[tokio::test]
    async fn test_short_ids_match_full_ids() {
        let extension = numbered(5);
        assert_eq!(ids(&extension, "1").await, ids(&extension, SECTION_TEMPLATE_1).await);
        assert_eq!(ids(&extension, "2").await, ids(&extension, SECTION_TEMPLATE_2).await);
        assert_eq!(ids(&extension, "3").await, ids(&extension, SECTION_TEMPLATE_3).await);
    }

    #[tokio::test]
    async fn test_unknown_section_is_empty() {
        assert!(ids(&numbered(5), "discover-section-template4").await.is_empty());
    }

    #[tokio::test]
    async fn test_items_carry_section_type_and_fallbacks() {
        let extension = ContentTemplate::new(Catalog::new(vec![
            TitleRecord {
                title_id: Some("x".to_string()),
                ..TitleRecord::default()
            },
            TitleRecord::default(),
            TitleRecord::new("y", "Blue Moon").with_secondary_titles(["Aoi Tsuki"]),
        ]));
        let section = DiscoverSection::new(SECTION_TEMPLATE_3, "", DiscoverSectionType::SimpleCarousel);
        let page = extension.get_discover_section_items(&section, Some(3)).await;
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].title, "Unknown Title");
        assert_eq!(page.items[0].subtitle, None);
        assert_eq!(page.items[0].image_url, "");
        assert_eq!(page.items[1].subtitle.as_deref(), Some("Aoi Tsuki"));
        assert!(page.items.iter().all(|item| item.kind == ItemType::SimpleCarouselItem));
    }

    #[test]
    fn test_layout_resolution() {
        let layout = Layout::resolve(SECTION_TEMPLATE_2, 9).unwrap();
        assert_eq!(layout.start, 4);
        assert_eq!(layout.stride, 2);
        assert_eq!(layout.item, ItemType::ProminentCarouselItem);
        assert!(Layout::resolve("4", 9).is_none());
    }
}
