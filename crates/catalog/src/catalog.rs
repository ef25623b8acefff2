use crate::assets::{Bundled, CONTENT_FILE};
use crate::error::{ErrorKind, Result};
use crate::models::TitleRecord;
use exn::ResultExt;
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

/// The immutable set of titles served by the extension.
///
/// Loaded once and never mutated afterwards. Cloning is cheap: all clones
/// share the same records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    titles: Arc<[TitleRecord]>,
}
impl Catalog {
    pub fn new(titles: impl Into<Vec<TitleRecord>>) -> Self {
        let titles: Vec<TitleRecord> = titles.into();
        Self { titles: titles.into() }
    }

    /// Decodes the data file embedded into the binary.
    #[instrument]
    pub fn bundled() -> Result<Self> {
        let data = Bundled::load(CONTENT_FILE)?;
        Self::from_json(data)
    }

    /// Decodes a JSON array of [`TitleRecord`]s.
    ///
    /// Fields the records don't know about are ignored, so newer data files
    /// remain readable.
    #[instrument(skip(json), fields(json_size = json.as_ref().len()))]
    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self> {
        let titles: Vec<TitleRecord> = serde_json::from_slice(json.as_ref()).or_raise(|| ErrorKind::InvalidData)?;
        tracing::debug!(titles = titles.len(), "Catalog decoded");
        Ok(Self::new(titles))
    }

    /// Reads and decodes a data file from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref()).or_raise(|| ErrorKind::Io)?;
        Self::from_json(data)
    }

    /// All records, in catalog order.
    pub fn titles(&self) -> &[TitleRecord] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Finds the first title whose identifier matches exactly.
    pub fn find(&self, title_id: &str) -> Option<&TitleRecord> {
        self.titles.iter().find(|title| title.id() == Some(title_id))
    }
}
impl From<Vec<TitleRecord>> for Catalog {
    fn from(titles: Vec<TitleRecord>) -> Self {
        Self::new(titles)
    }
}
impl FromIterator<TitleRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = TitleRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
