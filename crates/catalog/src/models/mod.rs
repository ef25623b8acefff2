mod chapter;
mod rating;
mod title;

pub use self::chapter::ChapterRecord;
pub use self::rating::ContentRating;
pub use self::title::TitleRecord;

use serde::{Deserialize, Deserializer};

/// Displayed when a title record carries no primary title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Displayed when a title record carries no synopsis.
pub const NO_SYNOPSIS: &str = "No synopsis.";
/// Language assumed for chapters without a language code.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// The data file treats empty strings the same as missing ones.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Deserializes a sequence that may be missing or `null` into an empty [`Vec`].
fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some(" "), Some(" "))]
    #[case(Some("Red Sky"), Some("Red Sky"))]
    fn test_present(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        let value = input.map(str::to_string);
        assert_eq!(present(&value), expected);
    }
}
