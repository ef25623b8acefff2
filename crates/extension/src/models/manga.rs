use inkdex_catalog::models::{ContentRating, TitleRecord};
use serde::Serialize;

/// A single tag, with a slug identifier and its display title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    pub id: String,
    pub title: String,
}
impl Tag {
    /// Derives the tag identifier from its label: lower-cased, with the
    /// first space replaced by a hyphen.
    ///
    /// # Examples
    ///
    /// ```
    /// use inkdex_extension::models::Tag;
    /// let tag = Tag::from_label("Slice of Life");
    /// assert_eq!(tag.id, "slice-of life");
    /// assert_eq!(tag.title, "Slice of Life");
    /// ```
    pub fn from_label(label: impl Into<String>) -> Self {
        let title = label.into();
        Self {
            id: title.to_lowercase().replacen(' ', "-", 1),
            title,
        }
    }
}

/// A named group of tags shown on the title page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSection {
    pub id: String,
    pub title: String,
    pub tags: Vec<Tag>,
}
impl TagSection {
    /// Builds a group from labels, skipping empty ones.
    pub fn from_labels(id: impl Into<String>, title: impl Into<String>, labels: &[String]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: labels.iter().filter(|label| !label.is_empty()).map(Tag::from_label).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaInfo {
    pub thumbnail_url: String,
    pub synopsis: String,
    pub primary_title: String,
    pub secondary_titles: Vec<String>,
    pub content_rating: ContentRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub tag_groups: Vec<TagSection>,
    pub artwork_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}
impl From<&TitleRecord> for MangaInfo {
    fn from(title: &TitleRecord) -> Self {
        let thumbnail_url = title.thumbnail_url().to_string();
        Self {
            synopsis: title.synopsis().to_string(),
            primary_title: title.primary_title().to_string(),
            secondary_titles: title.secondary_titles.clone(),
            content_rating: title.content_rating(),
            status: title.status.clone(),
            author: title.author.clone(),
            rating: title.rating,
            tag_groups: vec![
                TagSection::from_labels("genres", "Genres", &title.genres),
                TagSection::from_labels("tags", "Tags", &title.tags),
            ],
            artwork_urls: vec![thumbnail_url.clone()],
            share_url: title.url.clone(),
            thumbnail_url,
        }
    }
}

/// Full title details, as shown on the host's title page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceManga {
    pub manga_id: String,
    pub manga_info: MangaInfo,
}
impl SourceManga {
    pub fn new(manga_id: impl Into<String>, manga_info: MangaInfo) -> Self {
        Self {
            manga_id: manga_id.into(),
            manga_info,
        }
    }
}
