use inkdex_catalog::models::TitleRecord;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Polarity of the title match in a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    /// Keep titles containing the query.
    Include,
    /// Keep titles not containing the query.
    #[default]
    Exclude,
}
impl FilterValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }

    /// Tests a (lower-cased) `needle` against `haystack` with this polarity.
    pub fn accepts(&self, haystack: &str, needle: &str) -> bool {
        let contains = haystack.to_lowercase().contains(needle);
        match self {
            Self::Include => contains,
            Self::Exclude => !contains,
        }
    }
}
impl FromStr for FilterValue {
    type Err = Infallible;
    /// Anything other than `include` falls back to [`FilterValue::Exclude`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "include" => Self::Include,
            _ => Self::Exclude,
        })
    }
}
impl Display for FilterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFilterOption {
    pub id: String,
    pub value: String,
}

/// A dropdown filter the host renders above the search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFilter {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub options: Vec<SearchFilterOption>,
    /// Selected option by default
    pub value: String,
}
impl SearchFilter {
    pub fn dropdown(id: impl Into<String>, title: impl Into<String>, options: &[FilterValue], value: FilterValue) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: "dropdown",
            options: options
                .iter()
                .map(|option| SearchFilterOption {
                    id: option.as_str().to_string(),
                    value: option.as_str().to_string(),
                })
                .collect(),
            value: value.as_str().to_string(),
        }
    }
}

/// A filter selection sent back by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilterValue {
    pub id: String,
    pub value: String,
}

/// What the user typed, plus their filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub filters: Vec<SearchFilterValue>,
}
impl SearchQuery {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, id: impl Into<String>, value: impl Display) -> Self {
        self.filters.push(SearchFilterValue {
            id: id.into(),
            value: value.to_string(),
        });
        self
    }

    /// The polarity chosen by the first filter selection, if any.
    pub fn filter_value(&self) -> FilterValue {
        self.filters.first().and_then(|filter| filter.value.parse().ok()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
    pub manga_id: String,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}
impl SearchResultItem {
    /// Builds a result for a catalog entry; entries without an identifier
    /// produce `None`.
    pub fn from_title(title: &TitleRecord) -> Option<Self> {
        Some(Self {
            manga_id: title.id()?.to_string(),
            title: title.primary_title().to_string(),
            subtitle: title.subtitle().unwrap_or_default().to_string(),
            image_url: title.thumbnail_url().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("include", FilterValue::Include)]
    #[case("Include", FilterValue::Include)]
    #[case("exclude", FilterValue::Exclude)]
    #[case("Exclude", FilterValue::Exclude)]
    #[case("", FilterValue::Exclude)]
    #[case("sideways", FilterValue::Exclude)]
    fn test_filter_value_parse(#[case] input: &str, #[case] expected: FilterValue) {
        assert_eq!(input.parse::<FilterValue>().unwrap(), expected);
    }

    #[rstest]
    #[case(FilterValue::Include, "Red Sky", "red", true)]
    #[case(FilterValue::Include, "Blue Moon", "red", false)]
    #[case(FilterValue::Exclude, "Red Sky", "red", false)]
    #[case(FilterValue::Exclude, "Blue Moon", "red", true)]
    #[case(FilterValue::Include, "anything", "", true)]
    fn test_filter_accepts(#[case] filter: FilterValue, #[case] haystack: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(filter.accepts(haystack, needle), expected);
    }

    #[test]
    fn test_query_filter_defaults_to_exclude() {
        assert_eq!(SearchQuery::new("red").filter_value(), FilterValue::Exclude);
    }

    #[test]
    fn test_query_uses_first_filter_only() {
        let query = SearchQuery::new("red")
            .with_filter("search-filter-template", FilterValue::Include)
            .with_filter("other", FilterValue::Exclude);
        assert_eq!(query.filter_value(), FilterValue::Include);
    }

    #[test]
    fn test_result_subtitle_falls_back_to_empty() {
        let item = SearchResultItem::from_title(&TitleRecord::new("a", "Red Sky")).unwrap();
        assert_eq!(item.subtitle, "");
        assert_eq!(item.image_url, "");
    }
}
