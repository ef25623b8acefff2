use super::{DEFAULT_LANGUAGE, nullable_seq, present};
use serde::Deserialize;

/// A single chapter of a title, as stored in the data file.
///
/// Only the identifier is required for a chapter to be served; the other
/// fields resolve to defaults through the accessor methods.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRecord {
    /// Chapter identifier, unique within its title
    pub chapter_id: Option<String>,
    /// Language code (e.g. "EN")
    pub language_code: Option<String>,
    /// Chapter number; may be fractional for extras (e.g. `10.5`)
    pub chapter_number: Option<f64>,
    /// Volume number, if the title is released in volumes
    pub volume_number: Option<f64>,
    /// Page image URLs in reading order
    #[serde(default, deserialize_with = "nullable_seq")]
    pub pages: Vec<String>,
}
impl ChapterRecord {
    pub fn new(chapter_id: impl Into<String>) -> Self {
        Self {
            chapter_id: Some(chapter_id.into()),
            ..Self::default()
        }
    }

    pub fn with_language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    pub fn with_chapter_number(mut self, number: f64) -> Self {
        self.chapter_number = Some(number);
        self
    }

    pub fn with_volume_number(mut self, number: f64) -> Self {
        self.volume_number = Some(number);
        self
    }

    pub fn with_pages(mut self, pages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.pages = pages.into_iter().map(Into::into).collect();
        self
    }

    /// The chapter identifier, if the record has a usable one.
    pub fn id(&self) -> Option<&str> {
        present(&self.chapter_id)
    }

    /// Language code, defaulting to [`DEFAULT_LANGUAGE`].
    pub fn language_code(&self) -> &str {
        present(&self.language_code).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Chapter number, defaulting to the 1-based `position` of the record
    /// within its title's chapter list. A number of zero counts as unset.
    pub fn chapter_number(&self, position: usize) -> f64 {
        self.chapter_number.filter(|number| *number != 0.0).unwrap_or((position + 1) as f64)
    }
}
