//! Capability traits implemented by content extensions.
//!
//! The host instantiates an extension and calls into it through these
//! traits, one per capability it advertises in its
//! [`ExtensionInfo`](crate::ExtensionInfo). All methods are asynchronous so
//! that extensions backed by a network source fit the same interface; the
//! bundled [`ContentTemplate`](crate::ContentTemplate) never suspends.
//!
//! # Examples
//!
//! ```
//! use inkdex_extension::error::Result;
//! use inkdex_extension::{ChapterProviding, MangaProviding};
//!
//! async fn first_chapter_pages(extension: &(impl MangaProviding + ChapterProviding), id: &str) -> Result<Vec<String>> {
//!     let manga = extension.get_manga_details(id).await?;
//!     let chapters = extension.get_chapters(&manga, None).await?;
//!     match chapters.first() {
//!         Some(chapter) => Ok(extension.get_chapter_details(chapter).await?.pages),
//!         None => Ok(Vec::new()),
//!     }
//! }
//! ```

use crate::error::Result;
use crate::form::Form;
use crate::models::{
    Chapter, ChapterDetails, DiscoverSection, DiscoverSectionItem, PagedResults, SearchFilter, SearchQuery,
    SearchResultItem, SourceManga,
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

/// Lifecycle hooks every extension implements.
#[async_trait]
pub trait Extension: Send + Sync {
    /// Called once by the host before any other method. Registers rate
    /// limiters and interceptors.
    async fn initialise(&self);
}

#[async_trait]
pub trait SettingsFormProviding: Send + Sync {
    async fn get_settings_form(&self) -> Form;
}

#[async_trait]
pub trait DiscoverSectionProviding: Send + Sync {
    /// The sections shown on the host's discover page, in display order.
    async fn get_discover_sections(&self) -> Vec<DiscoverSection>;

    /// Populates one section. `metadata` is the cursor returned with the
    /// previous page, if any.
    async fn get_discover_section_items(
        &self,
        section: &DiscoverSection,
        metadata: Option<u32>,
    ) -> PagedResults<DiscoverSectionItem>;
}

#[async_trait]
pub trait SearchResultsProviding: Send + Sync {
    async fn get_search_filters(&self) -> Vec<SearchFilter>;

    async fn get_search_results(&self, query: &SearchQuery, metadata: Option<u32>) -> PagedResults<SearchResultItem>;
}

#[async_trait]
pub trait MangaProviding: Send + Sync {
    /// Returns [`TitleNotFound`](crate::error::ErrorKind::TitleNotFound) if
    /// no title has the identifier.
    async fn get_manga_details(&self, manga_id: &str) -> Result<SourceManga>;
}

#[async_trait]
pub trait ChapterProviding: Send + Sync {
    /// Lists a title's chapters. Extensions may use `since_date` to return
    /// only chapters published after it.
    ///
    /// Returns [`TitleNotFound`](crate::error::ErrorKind::TitleNotFound) if
    /// the title does not exist.
    async fn get_chapters(&self, source_manga: &SourceManga, since_date: Option<OffsetDateTime>) -> Result<Vec<Chapter>>;

    /// Resolves a chapter's pages.
    ///
    /// Returns [`TitleNotFound`](crate::error::ErrorKind::TitleNotFound) if
    /// the title does not exist, or
    /// [`ChapterNotFound`](crate::error::ErrorKind::ChapterNotFound) if the
    /// title exists without that chapter.
    async fn get_chapter_details(&self, chapter: &Chapter) -> Result<ChapterDetails>;
}

/// Every capability a content-providing extension offers.
pub trait ContentExtension:
    Extension + SettingsFormProviding + DiscoverSectionProviding + SearchResultsProviding + MangaProviding + ChapterProviding
{
}
impl<T> ContentExtension for T where
    T: Extension
        + SettingsFormProviding
        + DiscoverSectionProviding
        + SearchResultsProviding
        + MangaProviding
        + ChapterProviding
{
}

pub type ExtensionHandle = Arc<dyn ContentExtension>;
