use super::ContentTemplate;
use crate::error::{ErrorKind, Result};
use crate::models::{Chapter, ChapterDetails, SourceManga};
use crate::providers::ChapterProviding;
use async_trait::async_trait;
use exn::OptionExt;
use time::OffsetDateTime;
use tracing::instrument;

#[async_trait]
impl ChapterProviding for ContentTemplate {
    /// Always returns the full chapter list; the catalog has no publication
    /// dates to compare the cutoff against.
    #[instrument(skip_all, fields(title_id = %source_manga.manga_id))]
    async fn get_chapters(
        &self,
        source_manga: &SourceManga,
        _since_date: Option<OffsetDateTime>,
    ) -> Result<Vec<Chapter>> {
        let manga_id = source_manga.manga_id.as_str();
        let title = self.title(manga_id)?;
        let chapters: Vec<Chapter> = title
            .chapters
            .iter()
            .enumerate()
            .filter_map(|(position, record)| Chapter::from_record(manga_id, title, position, record))
            .collect();
        tracing::debug!(chapters = chapters.len(), "Chapter list built");
        Ok(chapters)
    }

    #[instrument(skip_all, fields(title_id = %chapter.manga_id, chapter_id = %chapter.chapter_id))]
    async fn get_chapter_details(&self, chapter: &Chapter) -> Result<ChapterDetails> {
        let title = self.title(&chapter.manga_id)?;
        let record = title.find_chapter(&chapter.chapter_id).ok_or_raise(|| ErrorKind::ChapterNotFound {
            title_id: chapter.manga_id.clone(),
            chapter_id: chapter.chapter_id.clone(),
        })?;
        Ok(ChapterDetails {
            id: chapter.chapter_id.clone(),
            manga_id: chapter.manga_id.clone(),
            pages: record.pages.clone(),
        })
    }
}
