use super::ContentTemplate;
use crate::error::Result;
use crate::models::{MangaInfo, SourceManga};
use crate::providers::MangaProviding;
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl MangaProviding for ContentTemplate {
    #[instrument(skip(self))]
    async fn get_manga_details(&self, manga_id: &str) -> Result<SourceManga> {
        let title = self.title(manga_id)?;
        Ok(SourceManga::new(manga_id, MangaInfo::from(title)))
    }
}
