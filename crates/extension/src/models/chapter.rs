use inkdex_catalog::models::{ChapterRecord, DEFAULT_LANGUAGE, TitleRecord};
use serde::Serialize;

/// A chapter entry in a title's chapter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub chapter_id: String,
    /// Identifier of the title this chapter belongs to
    pub manga_id: String,
    pub lang_code: String,
    pub chap_num: f64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}
impl Chapter {
    /// A bare handle to a chapter, for callers that only know its
    /// identifiers (e.g. from a deep link). Only the identifiers are used
    /// when resolving the chapter's pages.
    pub fn reference(manga_id: impl Into<String>, chapter_id: impl Into<String>) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            manga_id: manga_id.into(),
            lang_code: DEFAULT_LANGUAGE.to_string(),
            chap_num: 0.0,
            title: String::new(),
            volume: None,
        }
    }

    /// Builds the entry for the chapter record at `position` within `title`;
    /// records without an identifier produce `None`.
    pub fn from_record(manga_id: &str, title: &TitleRecord, position: usize, record: &ChapterRecord) -> Option<Self> {
        Some(Self {
            chapter_id: record.id()?.to_string(),
            manga_id: manga_id.to_string(),
            lang_code: record.language_code().to_string(),
            chap_num: record.chapter_number(position),
            title: title.primary_title().to_string(),
            volume: record.volume_number,
        })
    }
}

/// The readable content of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDetails {
    pub id: String,
    pub manga_id: String,
    pub pages: Vec<String>,
}
