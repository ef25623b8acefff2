pub mod error;
mod form;
mod info;
pub mod models;
pub mod network;
mod providers;
mod template;

pub use crate::form::{Form, FormItem, FormSection};
pub use crate::info::{Capability, Developer, ExtensionInfo};
pub use crate::providers::{
    ChapterProviding, ContentExtension, DiscoverSectionProviding, Extension, ExtensionHandle, MangaProviding,
    SearchResultsProviding, SettingsFormProviding,
};
pub use crate::template::{ContentTemplate, SEARCH_FILTER_ID, SECTION_TEMPLATE_1, SECTION_TEMPLATE_2, SECTION_TEMPLATE_3};
