//! Host-facing data types.
//!
//! Everything here serializes with the host's camelCase field names.

mod chapter;
mod manga;
mod paged;
mod search;
mod section;

pub use self::chapter::{Chapter, ChapterDetails};
pub use self::manga::{MangaInfo, SourceManga, Tag, TagSection};
pub use self::paged::PagedResults;
pub use self::search::{FilterValue, SearchFilter, SearchFilterOption, SearchFilterValue, SearchQuery, SearchResultItem};
pub use self::section::{DiscoverSection, DiscoverSectionItem, DiscoverSectionType, ItemType};
pub use inkdex_catalog::models::ContentRating;
