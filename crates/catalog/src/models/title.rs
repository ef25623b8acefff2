use super::{ChapterRecord, ContentRating, NO_SYNOPSIS, UNKNOWN_TITLE, nullable_seq, present};
use serde::Deserialize;

/// One catalog entry, as stored in the data file.
///
/// Every optional field has an accessor that applies the catalog's fallback
/// rule; query code should go through those rather than reading the raw
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRecord {
    /// Title identifier, unique within the catalog
    pub title_id: Option<String>,
    /// Main display title
    pub primary_title: Option<String>,
    /// Alternative titles (translations, romanisations) in preference order
    #[serde(default, deserialize_with = "nullable_seq")]
    pub secondary_titles: Vec<String>,
    /// Cover image URL
    pub thumbnail_url: Option<String>,
    /// Short description
    pub synopsis: Option<String>,
    /// Raw content rating string (see [`ContentRating`])
    pub content_rating: Option<String>,
    /// Publication status (e.g. "Ongoing")
    pub status: Option<String>,
    /// Author name(s)
    pub author: Option<String>,
    /// Average user rating
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub tags: Vec<String>,
    /// Canonical share URL
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable_seq")]
    pub chapters: Vec<ChapterRecord>,
}
impl TitleRecord {
    pub fn new(title_id: impl Into<String>, primary_title: impl Into<String>) -> Self {
        Self {
            title_id: Some(title_id.into()),
            primary_title: Some(primary_title.into()),
            ..Self::default()
        }
    }

    pub fn with_secondary_titles(mut self, titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.secondary_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_content_rating(mut self, rating: impl Into<String>) -> Self {
        self.content_rating = Some(rating.into());
        self
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_chapters(mut self, chapters: impl IntoIterator<Item = ChapterRecord>) -> Self {
        self.chapters = chapters.into_iter().collect();
        self
    }

    /// The title identifier, if the record has a usable one.
    pub fn id(&self) -> Option<&str> {
        present(&self.title_id)
    }

    /// Primary title, defaulting to [`UNKNOWN_TITLE`].
    pub fn primary_title(&self) -> &str {
        present(&self.primary_title).unwrap_or(UNKNOWN_TITLE)
    }

    /// First secondary title, if any.
    pub fn subtitle(&self) -> Option<&str> {
        self.secondary_titles.first().map(String::as_str)
    }

    /// Thumbnail URL, defaulting to an empty string.
    pub fn thumbnail_url(&self) -> &str {
        present(&self.thumbnail_url).unwrap_or_default()
    }

    /// Synopsis, defaulting to [`NO_SYNOPSIS`].
    pub fn synopsis(&self) -> &str {
        present(&self.synopsis).unwrap_or(NO_SYNOPSIS)
    }

    pub fn content_rating(&self) -> ContentRating {
        ContentRating::from(self.content_rating.as_deref())
    }

    /// Finds the first chapter whose identifier matches exactly.
    pub fn find_chapter(&self, chapter_id: &str) -> Option<&ChapterRecord> {
        self.chapters.iter().find(|chapter| chapter.id() == Some(chapter_id))
    }
}
