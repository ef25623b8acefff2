use inkdex_catalog::models::TitleRecord;
use serde::Serialize;

/// How the host lays out a discovery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoverSectionType {
    Featured,
    ProminentCarousel,
    SimpleCarousel,
}

/// A browsable grouping of titles shown on the host's discover page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoverSection {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(rename = "type")]
    pub kind: DiscoverSectionType,
}
impl DiscoverSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: DiscoverSectionType) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            kind,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// Item flavour rendered inside a discovery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    FeaturedCarouselItem,
    ProminentCarouselItem,
    SimpleCarouselItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverSectionItem {
    pub manga_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: ItemType,
}
impl DiscoverSectionItem {
    /// Builds an item for a catalog entry; entries without an identifier
    /// can't be opened by the host and produce `None`.
    pub fn from_title(title: &TitleRecord, kind: ItemType) -> Option<Self> {
        Some(Self {
            manga_id: title.id()?.to_string(),
            title: title.primary_title().to_string(),
            subtitle: title.subtitle().map(str::to_string),
            image_url: title.thumbnail_url().to_string(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serialize() {
        let title = TitleRecord::new("a", "Red Sky").with_thumbnail_url("https://example.com/a.png");
        let item = DiscoverSectionItem::from_title(&title, ItemType::FeaturedCarouselItem).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"mangaId":"a","title":"Red Sky","imageUrl":"https://example.com/a.png","type":"featuredCarouselItem"}"#
        );
    }

    #[test]
    fn test_item_requires_id() {
        assert!(DiscoverSectionItem::from_title(&TitleRecord::default(), ItemType::SimpleCarouselItem).is_none());
    }

    #[test]
    fn test_section_serialize() {
        let section = DiscoverSection::new("s", "Section", DiscoverSectionType::ProminentCarousel).with_subtitle("Sub");
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, r#"{"id":"s","title":"Section","subtitle":"Sub","type":"prominentCarousel"}"#);
    }
}
