//! The catalog-backed content extension.

mod chapters;
mod discover;
mod manga;
mod search;

pub use self::discover::{SECTION_TEMPLATE_1, SECTION_TEMPLATE_2, SECTION_TEMPLATE_3};
pub use self::search::SEARCH_FILTER_ID;

use crate::error::{ErrorKind, Result};
use crate::form::Form;
use crate::network::{BasicRateLimiter, Interceptor, MainInterceptor, RateLimitOptions};
use crate::providers::{Extension, SettingsFormProviding};
use async_trait::async_trait;
use exn::OptionExt;
use inkdex_catalog::Catalog;
use inkdex_catalog::models::TitleRecord;

/// Content extension serving a static [`Catalog`].
///
/// Every query is a linear scan over the catalog it was constructed with.
/// The catalog is never modified, so a single instance can answer calls
/// from any number of tasks at once.
///
/// # Examples
///
/// ```
/// use inkdex_catalog::Catalog;
/// use inkdex_catalog::models::TitleRecord;
/// use inkdex_extension::{ContentTemplate, MangaProviding};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let catalog = Catalog::new(vec![TitleRecord::new("a", "Red Sky")]);
/// let extension = ContentTemplate::new(catalog);
/// let manga = extension.get_manga_details("a").await.unwrap();
/// assert_eq!(manga.manga_info.primary_title, "Red Sky");
/// # }
/// ```
#[derive(Debug)]
pub struct ContentTemplate {
    catalog: Catalog,
    rate_limiter: BasicRateLimiter,
    interceptor: MainInterceptor,
}
impl ContentTemplate {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            rate_limiter: BasicRateLimiter::new("main", RateLimitOptions::default()),
            interceptor: MainInterceptor::new("main"),
        }
    }

    /// Replace the default request budget.
    pub fn with_rate_limit(mut self, options: RateLimitOptions) -> Self {
        self.rate_limiter = BasicRateLimiter::new(self.rate_limiter.id().to_string(), options);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rate_limiter(&self) -> &BasicRateLimiter {
        &self.rate_limiter
    }

    pub fn interceptor(&self) -> &MainInterceptor {
        &self.interceptor
    }

    fn title(&self, title_id: &str) -> Result<&TitleRecord> {
        self.catalog.find(title_id).ok_or_raise(|| ErrorKind::TitleNotFound(title_id.to_string()))
    }
}

#[async_trait]
impl Extension for ContentTemplate {
    async fn initialise(&self) {
        self.rate_limiter.register_interceptor();
        self.interceptor.register_interceptor();
    }
}

#[async_trait]
impl SettingsFormProviding for ContentTemplate {
    async fn get_settings_form(&self) -> Form {
        Form::template()
    }
}
