use serde::Serialize;

/// One page of results, with an optional cursor for the next page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResults<T> {
    pub items: Vec<T>,
    /// Cursor to request the next page with; `None` means this is the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<u32>,
}
impl<T> PagedResults<T> {
    /// A single, final page.
    pub fn last(items: Vec<T>) -> Self {
        Self { items, metadata: None }
    }

    pub fn is_last(&self) -> bool {
        self.metadata.is_none()
    }
}
impl<T> FromIterator<T> for PagedResults<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::last(iter.into_iter().collect())
    }
}
