mod assets;
mod catalog;
pub mod error;
pub mod models;

pub use crate::assets::CONTENT_FILE;
pub use crate::catalog::Catalog;
